use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime};

/// Source of "now" for status derivation and export stamps.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Wall-clock time in the clock's own offset.
    fn now_local(&self) -> NaiveDateTime {
        self.now().naive_local()
    }

    fn today(&self) -> NaiveDate {
        self.now_local().date()
    }
}

/// The machine's local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant, for tests and previews.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Noon UTC-3 on `date`.
    pub fn at_noon(date: NaiveDate) -> Self {
        let offset = FixedOffset::west_opt(3 * 3600).expect("valid offset");
        let noon = date.and_hms_opt(12, 0, 0).expect("valid time");
        Self(noon.and_local_timezone(offset).single().expect("fixed offsets are unambiguous"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}
