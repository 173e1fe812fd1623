pub mod bank_page_service;
