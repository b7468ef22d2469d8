//! Conversions between the display unit (terabytes) and the storage unit (gigabytes).
//!
//! Both directions share [`GB_PER_TB`] so that a bound typed by a client and the label
//! rendered back to it always agree.

pub const GB_PER_TB: i64 = 1024;

/// Converts a terabyte value from a request into whole gigabytes, truncating toward zero.
pub fn to_storage_unit(terabytes: f64) -> i64 {
    (terabytes * GB_PER_TB as f64) as i64
}

/// Renders a gigabyte capacity for display, e.g. `500GB`, `1TB`, `1.9TB`.
pub fn format_display(gigabytes: Option<i32>) -> String {
    let Some(gb) = gigabytes else {
        return String::new();
    };

    let gb = i64::from(gb);
    if gb >= GB_PER_TB {
        let tb = gb as f64 / GB_PER_TB as f64;
        if tb.fract() == 0.0 {
            format!("{:.0}TB", tb)
        } else {
            format!("{:.1}TB", tb)
        }
    } else {
        format!("{}GB", gb)
    }
}
