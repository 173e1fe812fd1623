pub mod bank_page_query_dto;
