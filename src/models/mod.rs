pub mod billetera;
pub mod catalogo;
pub mod centro_costo;
pub mod cliente;
pub mod combustible;
pub mod conductor;
pub mod descuento;
pub mod empresa;
pub mod miembro;
pub mod permiso;
pub mod punto;
pub mod tarjeta;
pub mod terminal;
pub mod transaccion;
pub mod turno;
pub mod usuario;
pub mod vehiculo;
