// storefront/src/models/mod.rs

//! Application-side models. All serialise with camelCase keys; the API client
//! converts them to and from the backend's snake_case wire format.

pub mod advertisement;
pub mod book;
pub mod cart;
pub mod check_in;
pub mod like;
pub mod member;
pub mod payment;
pub mod review;

pub use advertisement::{Advertisement, AdvertisementInput};
pub use book::{Book, Page};
pub use cart::{Cart, CartEntry};
pub use check_in::CheckInStatus;
pub use like::Like;
pub use member::{Member, MemberUpdate};
pub use payment::{CreatedOrder, Payment};
pub use review::{NewReview, Review};
