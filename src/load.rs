mod devices;
mod price;
mod raw;

pub use self::{
    devices::{POWER, load_devices},
    price::{PRICE, load_prices},
};
