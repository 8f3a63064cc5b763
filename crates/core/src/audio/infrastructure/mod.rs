pub mod hound_slicer;
