pub mod bit_io;
pub mod efficiency;
