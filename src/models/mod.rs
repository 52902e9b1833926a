pub mod break_window;
pub mod calculation;
pub mod clock_time;
pub mod interval;
pub mod work_day;
