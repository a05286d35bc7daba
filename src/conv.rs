//! Conversion between raw TMON codes and temperatures in millidegree Celsius.
//!
//! The sensor counts down from [`AVS_TMON_TEMP_OFFSET`]: code 0 is the hottest
//! representable temperature and [`AVS_TMON_TEMP_MAX`] the coldest.

use crate::consts::{
    AVS_TMON_TEMP_MASK, AVS_TMON_TEMP_MAX, AVS_TMON_TEMP_MIN, AVS_TMON_TEMP_OFFSET,
    AVS_TMON_TEMP_SLOPE,
};

/// Convert a HW code to a temperature reading (millidegree Celsius).
///
/// Only the low 10 bits of `code` are significant. The result is negative for
/// codes colder than 0 °C.
pub const fn code_to_temp(code: u32) -> i32 {
    AVS_TMON_TEMP_OFFSET - ((code & AVS_TMON_TEMP_MASK) as i32) * AVS_TMON_TEMP_SLOPE
}

/// Convert a temperature (millidegree Celsius) to a HW code.
///
/// Temperatures outside the representable range saturate to the coldest or
/// hottest code. When `round_low` is set the code is rounded up, which moves
/// the threshold towards the low side so that a low trip includes its
/// boundary.
pub const fn temp_to_code(temp: i32, round_low: bool) -> u32 {
    if temp < AVS_TMON_TEMP_MIN {
        return AVS_TMON_TEMP_MAX;
    }

    if temp >= AVS_TMON_TEMP_OFFSET {
        return 0;
    }

    let delta = (AVS_TMON_TEMP_OFFSET - temp) as u32;
    let slope = AVS_TMON_TEMP_SLOPE as u32;
    if round_low {
        delta.div_ceil(slope)
    } else {
        delta / slope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_to_temp_endpoints() {
        assert_eq!(code_to_temp(0), 410040);
        assert_eq!(code_to_temp(1023), -88161);
        assert_eq!(code_to_temp(1023), AVS_TMON_TEMP_MIN);
    }

    #[test]
    fn test_code_to_temp_ignores_high_bits() {
        assert_eq!(code_to_temp(0x400), code_to_temp(0));
        assert_eq!(code_to_temp(0xFFFF_FC00 | 739), code_to_temp(739));
    }

    #[test]
    fn test_code_to_temp_is_monotonic() {
        for code in 1..=AVS_TMON_TEMP_MAX {
            assert!(code_to_temp(code) < code_to_temp(code - 1));
        }
    }

    #[test]
    fn test_temp_to_code_recovers_every_code() {
        for code in 0..=AVS_TMON_TEMP_MAX {
            let temp = code_to_temp(code);
            assert_eq!(temp_to_code(temp, false), code);
            // Exact multiples of the slope do not round.
            assert_eq!(temp_to_code(temp, true), code);
        }
    }

    #[test]
    fn test_temp_to_code_saturates() {
        assert_eq!(temp_to_code(-88162, false), 1023);
        assert_eq!(temp_to_code(-88162, true), 1023);
        assert_eq!(temp_to_code(i32::MIN, false), 1023);
        assert_eq!(temp_to_code(410040, false), 0);
        assert_eq!(temp_to_code(410040, true), 0);
        assert_eq!(temp_to_code(i32::MAX, true), 0);
    }

    #[test]
    fn test_temp_to_code_rounding_direction() {
        // 410040 - 50000 = 360040 = 739 * 487 + 147
        assert_eq!(temp_to_code(50000, false), 739);
        assert_eq!(temp_to_code(50000, true), 740);
        assert_eq!(code_to_temp(739), 50147);
        assert_eq!(code_to_temp(740), 49660);

        // 410040 - 30000 = 380040 = 780 * 487 + 180
        assert_eq!(temp_to_code(30000, false), 780);
        assert_eq!(temp_to_code(30000, true), 781);
    }

    #[test]
    fn test_temp_to_code_near_boundary() {
        let temp = code_to_temp(500);
        assert_eq!(temp_to_code(temp + 1, false), 499);
        assert_eq!(temp_to_code(temp + 1, true), 500);
        assert_eq!(temp_to_code(temp - 1, false), 500);
        assert_eq!(temp_to_code(temp - 1, true), 501);
    }
}
