//! User-facing Turkish strings.

/// How a failed operation is reported.
///
/// A rejection from the server is shown verbatim, optionally after
/// `rejected_prefix`; transport failures show `transport` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FailureText {
    pub rejected_prefix: Option<&'static str>,
    pub transport: &'static str,
}

pub const LOAD_STATS: FailureText = FailureText {
    rejected_prefix: Some("İstatistikler yüklenemedi: "),
    transport: "İstatistikler yüklenirken hata oluştu",
};
pub const LOAD_VISITORS: FailureText = FailureText {
    rejected_prefix: Some("Ziyaretçiler yüklenemedi: "),
    transport: "Ziyaretçiler yüklenirken hata oluştu",
};
pub const GET_VISITOR: FailureText = FailureText {
    rejected_prefix: Some("Ziyaretçi bilgileri alınamadı: "),
    transport: "Ziyaretçi bilgileri alınırken hata oluştu",
};
pub const LOAD_USERS: FailureText = FailureText {
    rejected_prefix: Some("Kullanıcılar yüklenemedi: "),
    transport: "Kullanıcılar yüklenirken hata oluştu",
};
pub const GET_USER: FailureText = FailureText {
    rejected_prefix: Some("Kullanıcı bilgileri alınamadı: "),
    transport: "Kullanıcı bilgileri alınırken hata oluştu",
};
pub const SAVE: FailureText = FailureText {
    rejected_prefix: None,
    transport: "İşlem sırasında hata oluştu",
};
pub const EXIT: FailureText = FailureText {
    rejected_prefix: None,
    transport: "Çıkış kaydı sırasında hata oluştu",
};
pub const DELETE: FailureText = FailureText {
    rejected_prefix: None,
    transport: "Silme işlemi sırasında hata oluştu",
};
pub const LOGOUT: FailureText = FailureText {
    rejected_prefix: None,
    transport: "Çıkış işlemi sırasında hata oluştu",
};

pub const LOGOUT_FAILED: &str = "Çıkış işlemi başarısız";
pub const LOGOUT_CONFIRM: &str = "Çıkış yapmak istediğinizden emin misiniz?";

pub const NO_VISITORS: &str = "Henüz ziyaretçi kaydı bulunmuyor";
pub const NO_USERS: &str = "Henüz kullanıcı kaydı bulunmuyor";
pub const NOTHING_TO_EXPORT: &str = "Dışa aktarılacak veri bulunmuyor";
pub const EXPORT_DONE: &str = "Excel dosyası başarıyla indirildi";
pub const EXPORT_FAILED: &str = "Excel dosyası oluşturulurken hata oluştu";
pub const PRIMARY_ADMIN_PROTECTED: &str = "Ana admin kullanıcısını silemezsiniz";

pub const NAME_REQUIRED: &str = "İsim ve soyisim gerekli";
pub const ENTRY_REQUIRED: &str = "Giriş tarihi ve saati gerekli";
pub const EXIT_TIME_REQUIRED: &str = "Çıkış saati gerekli";
pub const USER_FIELDS_REQUIRED: &str = "Kullanıcı adı, isim ve soyisim gerekli";
pub const PASSWORD_REQUIRED: &str = "Yeni kullanıcı için şifre gerekli";

pub const ACTIVE_BADGE: &str = "Aktif";
pub const ADMIN_BADGE: &str = "Admin";
pub const MEMBER_BADGE: &str = "Kullanıcı";

pub fn delete_visitor_prompt(full_name: &str) -> String {
    format!("{full_name} adlı ziyaretçiyi silmek istediğinizden emin misiniz?")
}

pub fn delete_user_prompt(full_name: &str, username: &str) -> String {
    format!("{full_name} ({username}) adlı kullanıcıyı silmek istediğinizden emin misiniz?")
}
