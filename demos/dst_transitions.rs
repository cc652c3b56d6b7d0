use gps_datetime_utils::calendar::first_sunday;
use gps_datetime_utils::{apply_utc_offset, in_dst, DateTime};

fn main() {
    // Transition dates of the U.S. rule for a few years
    for year in [21, 23, 24, 26] {
        let start = first_sunday(year, 3).map(|day| day + 7);
        let end = first_sunday(year, 11);
        println!("20{:02}: DST from March {:?} to November {:?}", year, start, end);
    }

    // Walk across the spring transition of 2023 in Mountain Standard Time
    for utc_hour in 7..=10 {
        let utc = DateTime::new(23, 3, 12, utc_hour, 0, 0);
        let local = apply_utc_offset(utc, -7);
        println!("UTC {} -> local {} DST={}", utc, local, in_dst(&local));
    }
}
