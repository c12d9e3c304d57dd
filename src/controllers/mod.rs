pub mod billetera_controller;
pub mod cliente_controller;
pub mod tarjeta_controller;
pub mod transaccion_controller;
pub mod vehiculo_controller;
