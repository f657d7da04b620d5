pub mod params;
pub mod matcher;
pub mod explanation;
pub mod similarity;
