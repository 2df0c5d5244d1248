use serde::{Deserialize, Serialize};
use std::fmt;

/// Authority tag assigned to an authenticated user by the server.
///
/// - `General`: regular platform member, no admin access.
/// - `Expert`: counselor; uses the separate expert navigation track.
/// - `Staff`: lowest admin level.
/// - `CenterManager`: manages a single counseling center.
/// - `RegionalManager`: manages all centers in a region.
/// - `SuperAdmin`: full access, bypasses every check.
///
/// Values the client does not recognize deserialize to `Unknown`, which is
/// denied everywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    General,
    Expert,
    Staff,
    CenterManager,
    RegionalManager,
    SuperAdmin,
    #[serde(other)]
    Unknown,
}

/// Every recognized role, most senior first.
pub const ALL_ROLES: &[UserRole] = &[
    UserRole::SuperAdmin,
    UserRole::RegionalManager,
    UserRole::CenterManager,
    UserRole::Staff,
    UserRole::Expert,
    UserRole::General,
];

/// Style token used to color permission badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelColor {
    Red,
    Purple,
    Blue,
    Green,
    Teal,
    Gray,
}

impl LevelColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelColor::Red => "red",
            LevelColor::Purple => "purple",
            LevelColor::Blue => "blue",
            LevelColor::Green => "green",
            LevelColor::Teal => "teal",
            LevelColor::Gray => "gray",
        }
    }
}

impl UserRole {
    /// Parse a role identifier. Case-insensitive; `-` and `_` are interchangeable.
    /// Unrecognized values map to `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "general" => UserRole::General,
            "expert" => UserRole::Expert,
            "staff" => UserRole::Staff,
            "center_manager" => UserRole::CenterManager,
            "regional_manager" => UserRole::RegionalManager,
            "super_admin" => UserRole::SuperAdmin,
            _ => UserRole::Unknown,
        }
    }

    /// Canonical identifier, matching the wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::General => "general",
            UserRole::Expert => "expert",
            UserRole::Staff => "staff",
            UserRole::CenterManager => "center_manager",
            UserRole::RegionalManager => "regional_manager",
            UserRole::SuperAdmin => "super_admin",
            UserRole::Unknown => "unknown",
        }
    }

    /// Position in the admin hierarchy; lower is more senior.
    /// `Expert`, `General` and `Unknown` sit outside the ranking.
    pub fn rank(&self) -> Option<u8> {
        match self {
            UserRole::SuperAdmin => Some(0),
            UserRole::RegionalManager => Some(1),
            UserRole::CenterManager => Some(2),
            UserRole::Staff => Some(3),
            UserRole::Expert | UserRole::General | UserRole::Unknown => None,
        }
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self, UserRole::SuperAdmin)
    }

    /// True for every role on the admin track.
    pub fn is_admin(&self) -> bool {
        self.rank().is_some()
    }

    /// Check whether this role is at least as senior as `min`.
    ///
    /// `SuperAdmin` satisfies every requirement. Ranked roles compare by rank;
    /// unranked roles only satisfy an identical requirement. `Unknown` never
    /// satisfies anything and is never satisfied except by `SuperAdmin`.
    pub fn has_min_level(&self, min: &UserRole) -> bool {
        if self.is_super_admin() {
            return true;
        }
        if matches!(self, UserRole::Unknown) || matches!(min, UserRole::Unknown) {
            return false;
        }
        match (self.rank(), min.rank()) {
            (Some(own), Some(required)) => own <= required,
            (None, None) => self == min,
            _ => false,
        }
    }

    /// Human-readable level shown next to the user's name.
    pub fn admin_level_text(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::RegionalManager => "Regional Manager",
            UserRole::CenterManager => "Center Manager",
            UserRole::Staff => "Staff",
            UserRole::Expert => "Expert",
            UserRole::General => "General User",
            UserRole::Unknown => "User",
        }
    }

    pub fn permission_level_color(&self) -> LevelColor {
        match self {
            UserRole::SuperAdmin => LevelColor::Red,
            UserRole::RegionalManager => LevelColor::Purple,
            UserRole::CenterManager => LevelColor::Blue,
            UserRole::Staff => LevelColor::Green,
            UserRole::Expert => LevelColor::Teal,
            UserRole::General | UserRole::Unknown => LevelColor::Gray,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-function form of [`UserRole::is_admin`].
pub fn is_admin(role: &UserRole) -> bool {
    role.is_admin()
}

/// Free-function form of [`UserRole::has_min_level`].
pub fn has_min_permission_level(role: &UserRole, min: &UserRole) -> bool {
    role.has_min_level(min)
}

pub fn admin_level_text(role: &UserRole) -> &'static str {
    role.admin_level_text()
}

pub fn permission_level_color(role: &UserRole) -> LevelColor {
    role.permission_level_color()
}
