pub mod constants;
pub mod mood;
pub mod page;

pub use mood::MoodPage;
pub use page::Page;
