pub mod word_store;
