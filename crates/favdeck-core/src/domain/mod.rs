pub mod contact;
pub mod favorite;
pub mod ids;

pub use contact::{
    Contact, ContactName, Coordinates, DateOfBirth, Location, Picture, Postcode, Street,
    TimezoneInfo,
};
pub use favorite::{ContactSnapshot, FavoriteRecord};
pub use ids::ContactId;
