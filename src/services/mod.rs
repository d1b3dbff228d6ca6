// Service exports
pub mod fcm;
pub mod supabase;

pub use fcm::{FcmClient, FcmError, ServiceAccount, DEFAULT_FCM_ENDPOINT};
pub use supabase::{SupabaseClient, SupabaseError, SupabaseTables};
