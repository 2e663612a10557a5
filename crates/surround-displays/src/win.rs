use std::mem;
use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{BOOL, LPARAM, RECT, TRUE},
        Graphics::Gdi::{
            EnumDisplayMonitors, EnumDisplaySettingsW, GetMonitorInfoW, DEVMODEW,
            ENUM_CURRENT_SETTINGS, HDC, HMONITOR, MONITORINFOEXW,
        },
    },
};

use crate::bounds::PhysicalBounds;

#[derive(Clone, Copy)]
pub struct DisplayImpl(pub HMONITOR);

unsafe impl Send for DisplayImpl {}
unsafe impl Sync for DisplayImpl {}

impl DisplayImpl {
    pub fn list() -> Vec<Self> {
        unsafe extern "system" fn monitor_enum_proc(
            hmonitor: HMONITOR,
            _hdc: HDC,
            _lprc_clip: *mut RECT,
            lparam: LPARAM,
        ) -> BOOL {
            let list = unsafe { &mut *(lparam.0 as *mut Vec<DisplayImpl>) };
            list.push(DisplayImpl(hmonitor));
            TRUE
        }

        let mut list = vec![];
        let ok = unsafe {
            EnumDisplayMonitors(
                None,
                None,
                Some(monitor_enum_proc),
                LPARAM(std::ptr::addr_of_mut!(list) as isize),
            )
        };
        if !ok.as_bool() {
            tracing::warn!("EnumDisplayMonitors failed");
        }

        list
    }

    pub fn raw_id(&self) -> u64 {
        self.0 .0 as u64
    }

    fn monitor_info(&self) -> Option<MONITORINFOEXW> {
        let mut info = MONITORINFOEXW::default();
        info.monitorInfo.cbSize = mem::size_of::<MONITORINFOEXW>() as u32;

        unsafe { GetMonitorInfoW(self.0, &mut info as *mut _ as *mut _) }
            .as_bool()
            .then_some(info)
    }

    pub fn physical_bounds(&self) -> Option<PhysicalBounds> {
        let rect = self.monitor_info()?.monitorInfo.rcMonitor;
        Some(PhysicalBounds::from_ltrb(
            rect.left,
            rect.top,
            rect.right,
            rect.bottom,
        ))
    }

    pub fn refresh_rate(&self) -> u32 {
        let Some(info) = self.monitor_info() else {
            return 0;
        };

        let mut devmode = DEVMODEW {
            dmSize: mem::size_of::<DEVMODEW>() as u16,
            ..Default::default()
        };

        let ok = unsafe {
            EnumDisplaySettingsW(
                PCWSTR(info.szDevice.as_ptr()),
                ENUM_CURRENT_SETTINGS,
                &mut devmode,
            )
        };

        if ok.as_bool() {
            devmode.dmDisplayFrequency
        } else {
            0
        }
    }
}
