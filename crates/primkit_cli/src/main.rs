//! CLI smoke probe.
//!
//! # Responsibility
//! - Verify `primkit_core` linkage and print one `name=value` line per operation.
//! - Keep output deterministic so it can be diffed across builds.

use log::info;
use primkit_core::{
    add, count_bits, factorial, get_counter, increment_counter, multiply, rect_area,
    rect_contains_point, reset_counter, reverse_bits, string_copy, string_length, LogConfig,
    Point, Rectangle,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match LogConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("primkit_cli: {err}");
            return ExitCode::from(2);
        }
    };
    if let Err(err) = config.apply() {
        eprintln!("primkit_cli: {err}");
        return ExitCode::from(2);
    }
    info!("event=probe_start module=cli status=ok");

    for line in probe_lines() {
        println!("{line}");
    }
    ExitCode::SUCCESS
}

fn probe_lines() -> Vec<String> {
    let rect = Rectangle::new(0, 0, 5, 3);
    let mut copied = [0u8; 8];
    string_copy(Some(&mut copied[..]), Some(b"hello\0".as_slice()), 3);
    let copied_len = usize::try_from(string_length(Some(&copied[..]))).unwrap_or(0);

    reset_counter();
    increment_counter();
    increment_counter();
    let counter = get_counter();
    reset_counter();

    vec![
        format!("ping={}", primkit_core::ping()),
        format!("version={}", primkit_core::core_version()),
        format!("add(2,3)={}", add(2, 3)),
        format!("multiply(6,7)={}", multiply(6, 7)),
        format!("factorial(5)={}", factorial(5)),
        format!("rect_area(5x3)={}", rect_area(Some(&rect))),
        format!(
            "rect_contains_point((5,0))={}",
            rect_contains_point(Some(&rect), Some(&Point::new(5, 0)))
        ),
        format!("string_length(\"abc\")={}", string_length(Some(b"abc\0".as_slice()))),
        format!(
            "string_copy(\"hello\",3)={}",
            String::from_utf8_lossy(&copied[..copied_len])
        ),
        format!("count_bits(0xff)={}", count_bits(0xff)),
        format!("reverse_bits(0x80)={:#04x}", reverse_bits(0x80)),
        format!("counter_after_two_increments={counter}"),
    ]
}
