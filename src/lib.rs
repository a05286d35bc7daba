//! Core of the Broadcom STB AVS TMON thermal sensor.
//!
//! The TMON block measures the die temperature and raises an interrupt when it
//! leaves a programmable low/high window. This crate converts between raw codes
//! and millidegree Celsius, programs the trip registers, and implements the
//! interrupt re-arm protocol. Bus enumeration, clocks and interrupt routing are
//! left to the platform, which hands over a [`TmonRegisterIo`] and calls
//! [`BrcmstbThermal::irq_thread`] from its threaded interrupt handler.

#![no_std]

extern crate alloc;

#[macro_use]
extern crate log;

mod consts;
mod conv;
mod error;
mod io;
mod regs;
mod soc;
mod tmon;
mod trip;

use axerrno::{AxError, AxResult};

pub use consts::{
    AVS_TMON_TEMP_MAX, AVS_TMON_TEMP_MIN, AVS_TMON_TEMP_OFFSET, AVS_TMON_TEMP_SLOPE,
    TMON_MMIO_SIZE, TmonRegOffset,
};
pub use conv::{code_to_temp, temp_to_code};
pub use error::{TmonError, TmonResult};
pub use io::{TmonMmio, TmonRegisterIo};
pub use soc::{BCM2711_THERMAL_DATA, BCM7445_THERMAL_DATA, TmonSocData};
pub use tmon::BrcmstbThermal;
pub use trip::{TMON_TRIPS, TripDescriptor, TripKind};

/// The thermal zone a sensor reports to.
pub trait ThermalZone {
    /// Called after every serviced interrupt with the temperature that
    /// triggered it, in millidegree Celsius.
    fn update(&self, temp: i32);
}

/// Callbacks the thermal governor uses to drive a sensor.
pub trait ThermalSensorOps {
    /// Current temperature in millidegree Celsius.
    fn get_temp(&self) -> AxResult<i32>;

    /// Move the trip window. `low <= -i32::MAX` and `high == i32::MAX` mean
    /// "no bound" on that side.
    fn set_trips(&self, low: i32, high: i32) -> AxResult;
}

impl<R: TmonRegisterIo, Z: ThermalZone> ThermalSensorOps for BrcmstbThermal<R, Z> {
    fn get_temp(&self) -> AxResult<i32> {
        BrcmstbThermal::get_temp(self).map_err(AxError::from)
    }

    fn set_trips(&self, low: i32, high: i32) -> AxResult {
        BrcmstbThermal::set_trips(self, low, high).map_err(AxError::from)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    struct Regs {
        status: u32,
    }

    impl TmonRegisterIo for Regs {
        fn read(&self, reg: TmonRegOffset) -> u32 {
            match reg {
                TmonRegOffset::Status => self.status,
                _ => 0,
            }
        }

        fn write(&mut self, _reg: TmonRegOffset, _value: u32) {}
    }

    struct Zone(Cell<usize>);

    impl ThermalZone for Zone {
        fn update(&self, _temp: i32) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn sensor(status: u32, socdata: &'static TmonSocData) -> impl ThermalSensorOps {
        BrcmstbThermal::new(Regs { status }, Zone(Cell::new(0)), socdata)
    }

    #[test]
    fn test_ops_get_temp() {
        let ops = sensor((1 << 11) | (739 << 1), &BCM7445_THERMAL_DATA);
        assert_eq!(ops.get_temp(), Ok(50147));

        let ops = sensor(0, &BCM7445_THERMAL_DATA);
        assert_eq!(ops.get_temp(), Err(AxError::Io));
    }

    #[test]
    fn test_ops_set_trips() {
        let ops = sensor(0, &BCM7445_THERMAL_DATA);
        assert_eq!(ops.set_trips(-i32::MAX, i32::MAX), Ok(()));

        let ops = sensor(0, &BCM2711_THERMAL_DATA);
        assert_eq!(ops.set_trips(0, 100000), Err(AxError::Unsupported));
    }
}
