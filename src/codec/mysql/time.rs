// Copyright 2017 PingCAP, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// See the License for the specific language governing permissions and
// limitations under the License.

use chrono::{Datelike, FixedOffset, TimeZone, Timelike};

use util::codec::{Error, Result};

/// Which of the three MySQL temporal column types a `Time` datum carries.
///
/// Only `Timestamp` is ever normalized to UTC on the wire; `Date` and
/// `DateTime` keep their wall-clock fields unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeType {
    Date,
    DateTime,
    Timestamp,
}

impl TimeType {
    fn tag(self) -> u64 {
        match self {
            TimeType::Date => 0,
            TimeType::DateTime => 1,
            TimeType::Timestamp => 2,
        }
    }
}

/// A broken-down MySQL temporal value plus the location it was interpreted in.
#[derive(Debug, Clone, PartialEq)]
pub struct Time {
    tp: TimeType,
    location: FixedOffset,
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
}

impl Time {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tp: TimeType,
        location: FixedOffset,
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Result<Time> {
        if year > 0x3FFF || month > 12 || day > 31 || hour > 23 || minute > 59 || second > 59
            || microsecond > 999_999
        {
            return Err(Error::InvalidDataType(format!(
                "time {}-{}-{} {}:{}:{}.{} is not representable",
                year, month, day, hour, minute, second, microsecond
            )));
        }
        Ok(Time {
            tp,
            location,
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        })
    }

    pub fn get_tp(&self) -> TimeType {
        self.tp
    }

    pub fn location(&self) -> FixedOffset {
        self.location
    }

    /// Re-expresses this instant in `target`, shifting the broken-down
    /// fields by the difference between the two fixed offsets.
    ///
    /// Only meaningful (and only ever called) for `Timestamp`-typed values:
    /// `Date`/`DateTime` carry wall-clock semantics and must never be
    /// shifted.
    pub fn convert_time_zone(&self, target: FixedOffset) -> Result<Time> {
        let date = self
            .location
            .ymd_opt(i32::from(self.year), u32::from(self.month), u32::from(self.day))
            .single()
            .ok_or_else(|| Error::InvalidDataType("time is not representable".into()))?;
        let naive = date
            .and_hms_micro_opt(
                u32::from(self.hour),
                u32::from(self.minute),
                u32::from(self.second),
                self.microsecond,
            )
            .ok_or_else(|| Error::InvalidDataType("time is not representable".into()))?;
        let shifted = naive.with_timezone(&target);
        Time::new(
            self.tp,
            target,
            shifted.year() as u16,
            shifted.month() as u8,
            shifted.day() as u8,
            shifted.hour() as u8,
            shifted.minute() as u8,
            shifted.second() as u8,
            self.microsecond,
        )
    }

    /// Packs the broken-down fields into the crate's canonical 64-bit
    /// representation used for `MysqlTime` wire payloads.
    ///
    /// The packing is conceptually `YYYYMMDDHHMMSS * 10^6 + microseconds`;
    /// taken literally that overflows `u64` for any year past 1844 (14
    /// decimal digits of date/time plus 6
    /// of microseconds need ~67 bits). This crate instead concatenates the
    /// same fields as fixed-width bit fields (year:14 month:4 day:5 hour:5
    /// minute:6 second:6 microsecond:20, plus a 2-bit type tag), which
    /// preserves the same "later instants encode larger" ordering the
    /// decimal formula intends while actually fitting in 64 bits.
    pub fn to_packed_u64(&self) -> u64 {
        let mut v = u64::from(self.microsecond);
        v |= u64::from(self.second) << 20;
        v |= u64::from(self.minute) << 26;
        v |= u64::from(self.hour) << 32;
        v |= u64::from(self.day) << 37;
        v |= u64::from(self.month) << 42;
        v |= u64::from(self.year) << 46;
        v |= self.tp.tag() << 60;
        v
    }
}
