pub mod intensity;
pub mod render_loop;
pub mod scheduler;
pub mod time;
