//! Database Models

// Serde helpers
pub mod serde_helpers;

// Catalog
pub mod movie;
pub mod promotion;

// Bookings & payments
pub mod booking;
pub mod payment;

// HR
pub mod employee;
pub mod salary;

// Facilities
pub mod inventory;

// Public site
pub mod feedback;
pub mod user;

// Re-exports
pub use booking::{Booking, BookingCreate, BookingId, BookingUpdate};
pub use employee::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
pub use feedback::{Feedback, FeedbackCreate, FeedbackId};
pub use inventory::{InventoryCreate, InventoryId, InventoryItem, InventoryUpdate};
pub use movie::{Movie, MovieCreate, MovieId, MovieStatus, MovieUpdate};
pub use payment::{Payment, PaymentCreate, PaymentId, PaymentMethod, PaymentUpdate};
pub use promotion::{Promotion, PromotionCreate, PromotionId, PromotionUpdate};
pub use salary::{Salary, SalaryCreate, SalaryId, SalaryUpdate};
pub use user::{User, UserCreate, UserId, UserUpdate};
