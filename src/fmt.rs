//! [`Writeable`] implementations for the public value types.
//!
//! Output is ISO 8601-shaped and locale-independent: `2020-02-29`,
//! `09:05:07.042`, `2020-02-29T09:05:07.042`. Years past 9999 use the
//! extended six-digit form with an explicit sign.

use core::fmt;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    date::{Date, Weekday},
    datetime::DateTime,
    month::{Month, MonthCode},
    time::Time,
};

fn write_padded_u8<W: fmt::Write + ?Sized>(value: u8, sink: &mut W) -> fmt::Result {
    (value / 10).write_to(sink)?;
    (value % 10).write_to(sink)
}

fn write_padded_millisecond<W: fmt::Write + ?Sized>(value: u16, sink: &mut W) -> fmt::Result {
    (value / 100).write_to(sink)?;
    ((value / 10) % 10).write_to(sink)?;
    (value % 10).write_to(sink)
}

fn write_year<W: fmt::Write + ?Sized>(mut year: i32, sink: &mut W) -> fmt::Result {
    if year > 9999 {
        sink.write_char('+')?;
        (year / 100_000).write_to(sink)?;
        year %= 100_000;
        (year / 10_000).write_to(sink)?;
        year %= 10_000;
    }
    (year / 1_000).write_to(sink)?;
    year %= 1_000;
    (year / 100).write_to(sink)?;
    year %= 100;
    (year / 10).write_to(sink)?;
    (year % 10).write_to(sink)
}

impl Writeable for Date {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        write_year(self.year().get(), sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.month().number(), sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.day().get(), sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let year_length = if self.year().get() <= 9999 { 4 } else { 7 };

        LengthHint::exact(6 + year_length)
    }
}

impl Writeable for Time {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        write_padded_u8(self.hour().get(), sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.minute().get(), sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.second().get(), sink)?;
        if self.millisecond().get() == 0 {
            return Ok(());
        }
        sink.write_char('.')?;
        write_padded_millisecond(self.millisecond().get(), sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.millisecond().get() == 0 {
            LengthHint::exact(8)
        } else {
            LengthHint::exact(12)
        }
    }
}

impl Writeable for DateTime {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        self.date().write_to(sink)?;
        sink.write_char('T')?;
        self.time().write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.date().writeable_length_hint()
            + LengthHint::exact(1)
            + self.time().writeable_length_hint()
    }
}

impl Writeable for Month {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(self.name())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(self.name().len())
    }
}

impl Writeable for Weekday {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(self.name())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(self.name().len())
    }
}

impl Writeable for MonthCode {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(self.as_str())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(self.as_str().len())
    }
}

impl_display_with_writeable!(Date);
impl_display_with_writeable!(Time);
impl_display_with_writeable!(DateTime);
impl_display_with_writeable!(Month);
impl_display_with_writeable!(Weekday);
impl_display_with_writeable!(MonthCode);
