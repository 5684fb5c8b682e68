pub mod shop_service;
