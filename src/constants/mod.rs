use std::env;
use std::sync::LazyLock;

macro_rules! lazy_env_var {
    ($name:ident) => {
        pub static $name: LazyLock<String> = LazyLock::new(|| {
            let var_name = stringify!($name);
            env::var(var_name).expect(&format!("{} must be set", var_name))
        });
    };
}

lazy_env_var!(MONGODB_URI);
lazy_env_var!(DB_NAME);
lazy_env_var!(USERS_COL_NAME);
lazy_env_var!(PROPOSALS_COL_NAME);
lazy_env_var!(TRIPS_COL_NAME);
lazy_env_var!(LICENSES_COL_NAME);
lazy_env_var!(SETTINGS_COL_NAME);
lazy_env_var!(EXPENSES_COL_NAME);
lazy_env_var!(PHOTOS_COL_NAME);

/// The one account whose role can never be changed and that can never be deleted.
pub const SUPER_ADMIN_ACCOUNT: &str = "admin";

pub const LICENSE_KEY_PREFIX: &str = "TRIP-";
pub const LICENSE_KEY_RANDOM_LEN: usize = 8;

pub const MARQUEE_SETTING_KEY: &str = "marquee";
pub const DEFAULT_MARQUEE_TEXT: &str = "Welcome to Tripmate, have a great journey!";
