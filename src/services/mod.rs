pub mod numeracion_service;
pub mod permisos_service;
pub mod reset_billetera_service;
pub mod sesion_service;
