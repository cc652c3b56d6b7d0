use gps_datetime_utils::{ClockConfig, GpsClock};

fn main() {
    // Mountain Standard Time, observing DST
    let mut clock = GpsClock::new(ClockConfig::default());

    // Nothing received yet, the display shows 88:88:88
    println!("Before fix: {:?}", clock.display_time().digits());

    let stream = "$GPGGA,063000.000,4043.3400,N,11152.4100,W,1,08,1.0,1400.0,M,,M,,*4F\r\n\
                  $GPRMC,063000.000,A,4043.3400,N,11152.4100,W,0.02,31.66,120323,,,A*7C\r\n";
    for byte in stream.bytes() {
        match clock.receive(byte) {
            Some(Ok(local)) => println!("Local standard time: {}", local),
            Some(Err(err)) => println!("Discarded: {}", err),
            None => {}
        }
    }

    let local = clock.current_local_date_time();
    println!(
        "Weekday={:?} DST={} display={:?}",
        local.weekday(),
        clock.is_dst_active(&local),
        clock.display_time().digits()
    );

    // A corrupt sentence leaves the clock alone
    let result = clock.ingest(b"$GPRMC,0631x0.000,A,,,,,,,120323,,,A*7C");
    println!("{:?}, still {}", result, clock.current_local_date_time());
}
