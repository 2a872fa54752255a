//! User-facing copy

pub const ORDER_CREATED: &str = "Order baru berhasil dibuat.";
pub const ORDER_UPDATED: &str = "Order berhasil diperbarui.";
pub const ORDER_SAVE_FAILED: &str = "Terjadi kesalahan saat menyimpan order.";
pub const PROGRESS_SAVE_FAILED: &str = "Terjadi kesalahan saat menyimpan progress.";
pub const ORDER_LOAD_FAILED: &str = "Terjadi kesalahan saat memuat detail order.";
pub const LOOKUP_NOT_FOUND: &str =
    "Order tidak ditemukan. Pastikan ID / Kode Order yang Anda masukkan sudah benar.";
pub const LOOKUP_FAILED: &str = "Terjadi kesalahan saat mengambil data. Silakan coba lagi.";

pub use shared::models::{MSG_CUSTOMER_NAME_REQUIRED, MSG_LOOKUP_EMPTY, MSG_PROGRESS_EMPTY};
