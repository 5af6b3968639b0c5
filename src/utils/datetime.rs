use time::error::Format;
use time::macros::format_description;
use time::OffsetDateTime;

/// Current UTC time in the reading-record format, e.g. 2023-04-01T12:30:05Z.
pub fn utc_timestamp() -> Result<String, Format> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");
    OffsetDateTime::now_utc().format(&format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_matches_record_format() {
        let ts = utc_timestamp().unwrap();
        assert_eq!(ts.len(), 20);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
        assert!(ts.ends_with('Z'));
    }
}
