//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBanknote as CashFlow, LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuHouse as DownPayment, LuLandmark as Mortgage, LuLayoutGrid as Dashboard,
        LuMenu as Menu, LuMoon as Moon, LuPiggyBank as Savings, LuRotateCcw as Reset,
        LuSun as Sun, LuTrendingUp as Trending, LuWallet as NetWorth, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowCounterclockwise as Reset, BsBank as Mortgage, BsCashCoin as CashFlow,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsGraphUp as Trending,
        BsGrid as Dashboard, BsHouseFill as DownPayment, BsList as Menu, BsMoon as Moon,
        BsPiggyBank as Savings, BsSun as Sun, BsWallet2 as NetWorth, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(DASHBOARD, Dashboard);
themed_icon!(DOWN_PAYMENT, DownPayment);
themed_icon!(NET_WORTH, NetWorth);
themed_icon!(CASH_FLOW, CashFlow);
themed_icon!(MORTGAGE, Mortgage);
themed_icon!(SAVINGS, Savings);
themed_icon!(TRENDING, Trending);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(RESET, Reset);
