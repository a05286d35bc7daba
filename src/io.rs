use core::ptr::NonNull;

use memory_addr::{AddrRange, VirtAddr};
use tock_registers::interfaces::{Readable, Writeable};

use crate::consts::{TMON_MMIO_SIZE, TmonRegOffset};
use crate::regs::TmonRegs;

/// Word access to the TMON register file.
///
/// Accesses are assumed to always succeed once the device is mapped.
pub trait TmonRegisterIo {
    fn read(&self, reg: TmonRegOffset) -> u32;
    fn write(&mut self, reg: TmonRegOffset, value: u32);
}

/// Memory-mapped TMON registers.
pub struct TmonMmio {
    base: VirtAddr,
    regs: NonNull<TmonRegs>,
}

// SAFETY: the register block is device memory owned by this driver instance,
// and every access goes through the owner's lock.
unsafe impl Send for TmonMmio {}

impl TmonMmio {
    /// Wrap the TMON register block mapped at `base`.
    ///
    /// # Safety
    ///
    /// `base` must be a non-null virtual address where at least
    /// [`TMON_MMIO_SIZE`] bytes of TMON registers are mapped, for as long as
    /// the returned value lives.
    pub unsafe fn new(base: VirtAddr) -> Self {
        Self {
            base,
            regs: unsafe { NonNull::new_unchecked(base.as_mut_ptr().cast()) },
        }
    }

    const fn regs(&self) -> &TmonRegs {
        unsafe { self.regs.as_ref() }
    }

    /// The address range decoded by the device.
    pub fn address_range(&self) -> AddrRange<VirtAddr> {
        AddrRange::new(
            self.base,
            VirtAddr::from_usize(self.base.as_usize() + TMON_MMIO_SIZE),
        )
    }
}

impl TmonRegisterIo for TmonMmio {
    fn read(&self, reg: TmonRegOffset) -> u32 {
        match reg {
            TmonRegOffset::Status => self.regs().STATUS.get(),
            TmonRegOffset::EnOvertempReset => self.regs().EN_OVERTEMP_RESET.get(),
            TmonRegOffset::ResetThresh => self.regs().RESET_THRESH.get(),
            TmonRegOffset::IntIdleTime => self.regs().INT_IDLE_TIME.get(),
            TmonRegOffset::EnTempIntSrcs => self.regs().EN_TEMP_INT_SRCS.get(),
            TmonRegOffset::IntThresh => self.regs().INT_THRESH.get(),
            TmonRegOffset::TempIntCode => self.regs().TEMP_INT_CODE.get(),
            TmonRegOffset::TpTestEnable => self.regs().TP_TEST_ENABLE.get(),
        }
    }

    fn write(&mut self, reg: TmonRegOffset, value: u32) {
        match reg {
            TmonRegOffset::EnOvertempReset => self.regs().EN_OVERTEMP_RESET.set(value),
            TmonRegOffset::ResetThresh => self.regs().RESET_THRESH.set(value),
            TmonRegOffset::IntIdleTime => self.regs().INT_IDLE_TIME.set(value),
            TmonRegOffset::EnTempIntSrcs => self.regs().EN_TEMP_INT_SRCS.set(value),
            TmonRegOffset::IntThresh => self.regs().INT_THRESH.set(value),
            TmonRegOffset::TpTestEnable => self.regs().TP_TEST_ENABLE.set(value),
            TmonRegOffset::Status | TmonRegOffset::TempIntCode => {
                warn!("[TMON] ignoring write {:#010X} to read-only {} register", value, reg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C, align(4))]
    struct Block([u32; TMON_MMIO_SIZE / 4]);

    #[test]
    fn test_mmio_access_hits_register_offsets() {
        let mut block = Block([0; TMON_MMIO_SIZE / 4]);
        let base = VirtAddr::from_usize(block.0.as_mut_ptr() as usize);
        let mut mmio = unsafe { TmonMmio::new(base) };

        mmio.write(TmonRegOffset::IntThresh, 0x07FE_07FE);
        mmio.write(TmonRegOffset::EnTempIntSrcs, 0b11);
        mmio.write(TmonRegOffset::TempIntCode, 0x123);
        assert_eq!(mmio.read(TmonRegOffset::IntThresh), 0x07FE_07FE);
        assert_eq!(mmio.read(TmonRegOffset::EnTempIntSrcs), 0b11);
        assert_eq!(mmio.read(TmonRegOffset::TempIntCode), 0);

        assert_eq!(mmio.address_range().size(), TMON_MMIO_SIZE);
        drop(mmio);

        assert_eq!(block.0[0x18 / 4], 0x07FE_07FE);
        assert_eq!(block.0[0x14 / 4], 0b11);
        assert_eq!(block.0[0x1C / 4], 0);
    }
}
