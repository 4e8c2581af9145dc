/// Returns the local calendar date.
#[cfg(not(test))]
pub fn today() -> time::Date {
    time::OffsetDateTime::now_local()
        .unwrap_or_else(|_| time::OffsetDateTime::now_utc())
        .date()
}

/// Returns a fixed date so view output is stable under test.
#[cfg(test)]
pub fn today() -> time::Date {
    time::macros::date!(2015 - 03 - 15)
}

pub fn month_name(date: time::Date) -> &'static str {
    match date.month() {
        time::Month::January => "January",
        time::Month::February => "February",
        time::Month::March => "March",
        time::Month::April => "April",
        time::Month::May => "May",
        time::Month::June => "June",
        time::Month::July => "July",
        time::Month::August => "August",
        time::Month::September => "September",
        time::Month::October => "October",
        time::Month::November => "November",
        time::Month::December => "December",
    }
}
