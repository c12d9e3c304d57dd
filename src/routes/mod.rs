pub mod billetera_routes;
pub mod cliente_routes;
pub mod tarjeta_routes;
pub mod transaccion_routes;
pub mod vehiculo_routes;
