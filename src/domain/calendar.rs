//! Calendar validation for month/day/year triples

/// Days in each month of a common year, January first
const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year: divisible by 4, not by 100 unless also by 400
pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or None if the month is out of range
pub fn days_in_month(month: u32, year: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }

    if month == 2 && is_leap_year(year) {
        Some(29)
    } else {
        Some(MONTH_LENGTHS[(month - 1) as usize])
    }
}

/// Check that month, day and year name a real calendar date.
/// Any year is accepted.
pub fn is_valid_date(month: u32, day: u32, year: u32) -> bool {
    match days_in_month(month, year) {
        Some(last_day) => (1..=last_day).contains(&day),
        None => false,
    }
}
