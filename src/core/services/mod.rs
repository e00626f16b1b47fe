pub mod extract_service;
