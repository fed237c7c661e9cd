pub mod use_appointments;
pub mod use_availabilities;
pub mod use_blocks;
pub mod use_toast;
