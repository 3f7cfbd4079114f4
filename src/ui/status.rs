//! Status indicators (battery, wireless, network) fed by the platform probes.

use crate::platform::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryIndicator {
    pub level: u8,
    pub charging: bool,
}

/// Cached probe results. `None` hides the indicator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusIndicators {
    pub battery: Option<BatteryIndicator>,
    pub wireless: Option<u8>,
    pub ip_address: String,
    pub dns_server: String,
}

impl StatusIndicators {
    pub fn refresh(&mut self, platform: &dyn Platform) {
        self.battery = platform.can_show_battery_level().then(|| BatteryIndicator {
            level: platform.battery_level(),
            charging: platform.is_battery_charging(),
        });
        self.wireless = platform
            .has_wireless_connection()
            .then(|| platform.wireless_level());
        self.ip_address = platform.ip_address();
        self.dns_server = platform.dns_server();
    }

    /// One-line summary, e.g. `"80% | wifi 3/3 | 192.168.1.42"`.
    pub fn summary(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(b) = self.battery {
            parts.push(format!("{}%{}", b.level, if b.charging { "+" } else { "" }));
        }
        if let Some(bars) = self.wireless {
            parts.push(format!("wifi {bars}/3"));
        }
        if !self.ip_address.is_empty() {
            parts.push(self.ip_address.clone());
        }
        parts.join(" | ")
    }
}
