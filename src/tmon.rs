use spin::Mutex;

use crate::ThermalZone;
use crate::consts::TmonRegOffset;
use crate::conv::{code_to_temp, temp_to_code};
use crate::error::{TmonError, TmonResult};
use crate::io::TmonRegisterIo;
use crate::soc::TmonSocData;
use crate::trip::TripKind;

/// A Broadcom STB AVS TMON thermal sensor.
///
/// The interrupt thread and the thermal governor both perform read-modify-write
/// sequences on the shared enable and threshold words, so every register access
/// goes through one lock.
pub struct BrcmstbThermal<R: TmonRegisterIo, Z: ThermalZone> {
    regs: Mutex<R>,
    zone: Z,
    socdata: &'static TmonSocData,
}

impl<R: TmonRegisterIo, Z: ThermalZone> BrcmstbThermal<R, Z> {
    /// Attach to a TMON block.
    ///
    /// The low and high trips start disarmed until the governor supplies bounds.
    pub fn new(regs: R, zone: Z, socdata: &'static TmonSocData) -> Self {
        let mut regs = regs;
        if socdata.has_trips {
            trip_enable(&mut regs, TripKind::Low, false);
            trip_enable(&mut regs, TripKind::High, false);
        }
        info!("registered AVS TMON of-sensor driver ({})", socdata.compatible);
        Self {
            regs: Mutex::new(regs),
            zone,
            socdata,
        }
    }

    pub fn socdata(&self) -> &'static TmonSocData {
        self.socdata
    }

    pub fn zone(&self) -> &Z {
        &self.zone
    }

    /// Read the current temperature in millidegree Celsius.
    ///
    /// Readings below 0 °C are reported as 0.
    pub fn get_temp(&self) -> TmonResult<i32> {
        let val = self.regs.lock().read(TmonRegOffset::Status);

        if !self.socdata.is_valid(val) {
            error!("[TMON] reading not valid: status {:#010X}", val);
            return Err(TmonError::NotReady);
        }

        let t = code_to_temp(self.socdata.data(val));
        Ok(t.max(0))
    }

    /// Program the trip window requested by the governor.
    ///
    /// `low <= -i32::MAX` disables the low trip and `high == i32::MAX` disables
    /// the high trip. Any other bound is written and armed.
    pub fn set_trips(&self, low: i32, high: i32) -> TmonResult {
        if !self.socdata.has_trips {
            warn!(
                "[TMON] set trips {} <--> {} on {}, which has no trip interrupt",
                low, high, self.socdata.compatible
            );
            return Err(TmonError::Unsupported);
        }

        debug!("[TMON] set trips {} <--> {}", low, high);

        let mut regs = self.regs.lock();

        // The thermal framework uses -INT_MAX rather than INT_MIN for "no bound".
        if low <= -i32::MAX {
            trip_enable(&mut *regs, TripKind::Low, false);
        } else {
            set_trip_temp(&mut *regs, TripKind::Low, low);
            trip_enable(&mut *regs, TripKind::Low, true);
        }

        if high == i32::MAX {
            trip_enable(&mut *regs, TripKind::High, false);
        } else {
            set_trip_temp(&mut *regs, TripKind::High, high);
            trip_enable(&mut *regs, TripKind::High, true);
        }

        Ok(())
    }

    /// Service a temperature interrupt.
    ///
    /// Crossed trips are disarmed until the next [`set_trips`](Self::set_trips),
    /// since the hardware keeps interrupting for as long as the condition holds.
    /// The zone is then updated with the temperature latched by the interrupt.
    pub fn irq_thread(&self) {
        let intr = {
            let mut regs = self.regs.lock();
            let low = trip_temp(&*regs, TripKind::Low);
            let high = trip_temp(&*regs, TripKind::High);
            let intr = intr_temp(&*regs);

            debug!("[TMON] low/intr/high: {}/{}/{}", low, intr, high);

            if intr >= high {
                trip_enable(&mut *regs, TripKind::High, false);
            }
            if intr <= low {
                trip_enable(&mut *regs, TripKind::Low, false);
            }
            intr
        };

        // The governor may call back into set_trips from here.
        self.zone.update(intr);
    }

    /// Arm or disarm a trip.
    pub fn set_trip_enabled(&self, kind: TripKind, enabled: bool) {
        trip_enable(&mut *self.regs.lock(), kind, enabled);
    }

    /// Returns whether a trip is currently armed.
    pub fn trip_enabled(&self, kind: TripKind) -> bool {
        let trip = kind.descriptor();
        self.regs.lock().read(trip.enable_offs) & trip.enable_mask != 0
    }

    /// Temperature the trip is currently programmed to, in millidegree Celsius.
    pub fn trip_temp(&self, kind: TripKind) -> i32 {
        trip_temp(&*self.regs.lock(), kind)
    }

    /// Program the threshold of a trip without changing whether it is armed.
    pub fn set_trip_temp(&self, kind: TripKind, temp: i32) {
        set_trip_temp(&mut *self.regs.lock(), kind, temp);
    }

    /// Temperature that triggered the last interrupt, in millidegree Celsius.
    pub fn intr_temp(&self) -> i32 {
        intr_temp(&*self.regs.lock())
    }
}

fn trip_enable<R: TmonRegisterIo>(regs: &mut R, kind: TripKind, en: bool) {
    let trip = kind.descriptor();
    let mut val = regs.read(trip.enable_offs);

    debug!("[TMON] {}able trip, type {}", if en { "en" } else { "dis" }, kind);

    if en {
        val |= trip.enable_mask;
    } else {
        val &= !trip.enable_mask;
    }

    regs.write(trip.enable_offs, val);
}

fn trip_temp<R: TmonRegisterIo>(regs: &R, kind: TripKind) -> i32 {
    let trip = kind.descriptor();
    code_to_temp(trip.decode(regs.read(trip.reg_offs)))
}

fn set_trip_temp<R: TmonRegisterIo>(regs: &mut R, kind: TripKind, temp: i32) {
    let trip = kind.descriptor();

    debug!("[TMON] set temp {} to {}", kind, temp);

    // Round toward low temp for the low interrupt.
    let val = trip.encode(temp_to_code(temp, kind == TripKind::Low));

    let mut orig = regs.read(trip.reg_offs);
    orig &= !trip.reg_mask;
    orig |= val;
    regs.write(trip.reg_offs, orig);
}

fn intr_temp<R: TmonRegisterIo>(regs: &R) -> i32 {
    code_to_temp(regs.read(TmonRegOffset::TempIntCode))
}
