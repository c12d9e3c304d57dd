pub mod billetera_repository;
pub mod cliente_repository;
pub mod tarjeta_repository;
pub mod transaccion_repository;
pub mod vehiculo_repository;
