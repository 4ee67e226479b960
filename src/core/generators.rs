// Value generators used when the store creates entities.
//
// Purpose
// - Produce identifiers, display colours and timestamp strings.
//
// Boundaries
// - Randomness and time are passed in by the caller, so everything here is
//   deterministic given its inputs.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use rand::{Rng, RngCore};
use std::fmt::Display;

pub const FALLBACK_ID_PREFIX: &str = "UUID";

/// Random v4 UUID drawn from `entropy`. If the source cannot deliver bytes the
/// identifier degrades to `UUID<epoch millis>`, which may collide.
pub fn new_id(entropy: &mut impl RngCore, now: DateTime<Utc>) -> String {
    let mut bytes = [0u8; 16];
    match entropy.try_fill_bytes(&mut bytes) {
        Ok(()) => uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "entropy source unavailable, using timestamp identifier");
            timestamp_id(now)
        }
    }
}

pub fn timestamp_id(now: DateTime<Utc>) -> String {
    format!("{FALLBACK_ID_PREFIX}{}", now.timestamp_millis())
}

/// Half-open bounds `[min, max)` for each RGB channel of a generated colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange {
    min: u8,
    max: u8,
}

impl ColorRange {
    /// `None` when the range is empty.
    pub fn new(min: u8, max: u8) -> Option<Self> {
        (min < max).then_some(Self { min, max })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }
}

impl Default for ColorRange {
    fn default() -> Self {
        Self { min: 30, max: 120 }
    }
}

/// `#rrggbb` in lowercase hex with every channel sampled from `range`.
pub fn random_dark_color(rng: &mut impl Rng, range: ColorRange) -> String {
    let [r, g, b]: [u8; 3] = std::array::from_fn(|_| rng.gen_range(range.min..range.max));
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Creation timestamp for topics, threads and comments, e.g. `2026-10-17T12:00:00.000Z`.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Creation date for users, e.g. `Sat Oct 17 2026`, as seen in the zone of `now`.
/// The store passes local time, so the day matches what the user's clock shows.
pub fn date_string<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod generators_tests {
    use super::*;
    use crate::test_support::fixtures::clock::fixed_instant;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    struct UnavailableEntropy;

    impl RngCore for UnavailableEntropy {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {}
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source unavailable"))
        }
    }

    fn is_lower_hex(s: &str) -> bool {
        s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
    }

    #[rstest]
    fn it_should_generate_a_version_4_uuid() {
        let mut rng = StdRng::seed_from_u64(1);
        let id = new_id(&mut rng, fixed_instant());
        let parsed = uuid::Uuid::parse_str(&id).expect("expected a valid uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[rstest]
    fn it_should_generate_distinct_ids_from_the_same_source() {
        let mut rng = StdRng::seed_from_u64(1);
        let first = new_id(&mut rng, fixed_instant());
        let second = new_id(&mut rng, fixed_instant());
        assert_ne!(first, second);
    }

    #[rstest]
    fn it_should_fall_back_to_a_timestamp_id_without_entropy() {
        let now = fixed_instant();
        let id = new_id(&mut UnavailableEntropy, now);
        assert_eq!(id, format!("UUID{}", now.timestamp_millis()));
    }

    #[rstest]
    fn it_should_reject_an_empty_color_range() {
        assert_eq!(ColorRange::new(120, 120), None);
        assert_eq!(ColorRange::new(121, 120), None);
        assert!(ColorRange::new(0, 1).is_some());
    }

    #[rstest]
    fn it_should_render_a_dark_color_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let color = random_dark_color(&mut rng, ColorRange::default());
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(is_lower_hex(&color[1..]));
            for channel in [&color[1..3], &color[3..5], &color[5..7]] {
                let value = u8::from_str_radix(channel, 16).unwrap();
                assert!((30..120).contains(&value), "channel {value} out of range");
            }
        }
    }

    #[rstest]
    fn it_should_pad_single_digit_channels() {
        let mut rng = StdRng::seed_from_u64(3);
        let range = ColorRange::new(0, 16).unwrap();
        let color = random_dark_color(&mut rng, range);
        assert!(color[1..].chars().step_by(2).all(|c| c == '0'));
    }

    #[rstest]
    fn it_should_format_both_timestamp_styles() {
        let now = fixed_instant();
        assert_eq!(iso_timestamp(now), "2026-10-17T12:30:45.000Z");
        assert_eq!(date_string(now), "Sat Oct 17 2026");
    }

    #[rstest]
    fn it_should_render_the_date_in_the_zone_it_is_given() {
        let late_evening = Utc.with_ymd_and_hms(2026, 10, 17, 23, 30, 0).unwrap();
        let east = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(date_string(late_evening), "Sat Oct 17 2026");
        assert_eq!(date_string(late_evening.with_timezone(&east)), "Sun Oct 18 2026");
    }
}
