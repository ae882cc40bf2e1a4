pub mod dedup_vector;
pub mod select_top_k;
pub mod title_case;

pub use dedup_vector::dedup_vector;
pub use select_top_k::select_top_k;
pub use title_case::title_case;
