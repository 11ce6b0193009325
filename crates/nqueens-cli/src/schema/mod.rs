pub mod search_record;
