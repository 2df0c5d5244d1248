use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBuilding, LdCalendar, LdCircle, LdClipboardList, LdCreditCard, LdFileText,
    LdGitBranch, LdKey, LdLayoutDashboard, LdList, LdMessageCircle, LdPlus, LdSettings, LdShield,
    LdUser, LdUserCheck, LdUsers, LdWallet,
};
use dioxus_free_icons::Icon;

const SIZE: u32 = 18;

/// Render a lucide icon by the name used in menu definitions.
/// Unknown or empty names render a neutral dot.
pub fn menu_icon(name: &str) -> Element {
    match name {
        "layout-dashboard" => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: SIZE, height: SIZE } },
        "building" => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: SIZE, height: SIZE } },
        "user-check" => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: SIZE, height: SIZE } },
        "users" => rsx! { Icon::<LdUsers> { icon: LdUsers, width: SIZE, height: SIZE } },
        "user" => rsx! { Icon::<LdUser> { icon: LdUser, width: SIZE, height: SIZE } },
        "credit-card" => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: SIZE, height: SIZE } },
        "wallet" => rsx! { Icon::<LdWallet> { icon: LdWallet, width: SIZE, height: SIZE } },
        "clipboard-list" => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: SIZE, height: SIZE } },
        "git-branch" => rsx! { Icon::<LdGitBranch> { icon: LdGitBranch, width: SIZE, height: SIZE } },
        "bell" => rsx! { Icon::<LdBell> { icon: LdBell, width: SIZE, height: SIZE } },
        "settings" => rsx! { Icon::<LdSettings> { icon: LdSettings, width: SIZE, height: SIZE } },
        "key" => rsx! { Icon::<LdKey> { icon: LdKey, width: SIZE, height: SIZE } },
        "shield" => rsx! { Icon::<LdShield> { icon: LdShield, width: SIZE, height: SIZE } },
        "list" => rsx! { Icon::<LdList> { icon: LdList, width: SIZE, height: SIZE } },
        "plus" => rsx! { Icon::<LdPlus> { icon: LdPlus, width: SIZE, height: SIZE } },
        "file-text" => rsx! { Icon::<LdFileText> { icon: LdFileText, width: SIZE, height: SIZE } },
        "calendar" => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: SIZE, height: SIZE } },
        "message-circle" => rsx! { Icon::<LdMessageCircle> { icon: LdMessageCircle, width: SIZE, height: SIZE } },
        _ => rsx! { Icon::<LdCircle> { icon: LdCircle, width: 8, height: 8 } },
    }
}
