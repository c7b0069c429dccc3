pub mod cta;
pub mod features;
pub mod hero;
pub mod how_it_works;
pub mod landing;
pub mod testimonials;
