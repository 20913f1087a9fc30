//! Wall-clock helpers shared by host adapters and shell views.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Local wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    /// Hour in `0..24`.
    pub hour: u32,
    /// Minute in `0..60`.
    pub minute: u32,
}

impl ClockTime {
    /// Reads the host's local time. Native builds report UTC.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_unix_ms(unix_time_ms_now())
        }
    }

    /// Derives a UTC time of day from a unix millisecond timestamp.
    pub fn from_unix_ms(ms: u64) -> Self {
        let minutes_of_day = (ms / 60_000) % (24 * 60);
        Self {
            hour: (minutes_of_day / 60) as u32,
            minute: (minutes_of_day % 60) as u32,
        }
    }

    /// Formats as zero-padded 24-hour `HH:MM`.
    pub fn format_24h(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}
