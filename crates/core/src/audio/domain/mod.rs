pub mod audio_slicer;
pub mod boundary_clips;
pub mod frame_range;
pub mod trim_window;
