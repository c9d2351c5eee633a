// Built-in command set, seeded when the registry file is missing or unreadable

use crate::voice_commands::descriptor::CommandDescriptor;

/// Target used by the built-in mail client commands
pub const MAIL_CLIENT: &str = "outlook";

/// All built-in descriptors in registration order
pub fn default_descriptors() -> Vec<CommandDescriptor> {
    let mut commands = system_wide_commands();
    commands.extend(active_window_commands());
    commands.extend(specific_application_commands());
    commands.extend(mail_client_diagnostics());
    commands
}

fn system_wide_commands() -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor::system_wide(
            "volume_up",
            "Volume up",
            &["sesi arttır", "ses arttır", "sesi yükselt", "ses aç"],
            "VolumeUp",
        ),
        CommandDescriptor::system_wide(
            "volume_down",
            "Volume down",
            &["sesi azalt", "ses azalt", "sesi düşür", "sesi kıs"],
            "VolumeDown",
        ),
        CommandDescriptor::system_wide(
            "volume_mute",
            "Mute",
            &["sesi kapat", "ses kapat", "sesi sustur", "sessiz"],
            "VolumeMute",
        ),
        CommandDescriptor::custom(
            "dictation_stop",
            "Stop dictation",
            &["[dikte_durduruldu]", "dikte durdur", "dictation stop", "diktasyon durdur"],
            "dictation_stop",
        ),
        CommandDescriptor::custom(
            "dictation_start",
            "Start dictation",
            &["[dikte_başlatıldı]", "dikte başlat", "dictation start", "diktasyon başlat"],
            "dictation_start",
        ),
        CommandDescriptor::custom(
            "speech_synthesis",
            "Read text aloud",
            &["[ses_sentezi]", "metni oku", "text to speech", "seslendirme"],
            "speech_synthesis",
        ),
        CommandDescriptor::system_wide(
            "lock_computer",
            "Lock computer",
            &["bilgisayarı kilitle", "lock computer", "kilitle"],
            "Win+L",
        ),
        CommandDescriptor::system_wide(
            "show_desktop",
            "Show desktop",
            &["masaüstünü göster", "show desktop", "masaüstü"],
            "Win+D",
        ),
        CommandDescriptor::system_wide(
            "screenshot",
            "Screenshot",
            &["ekran görüntüsü", "screenshot", "ekran görüntüsü al"],
            "Win+PrintScreen",
        ),
        CommandDescriptor::system_wide(
            "run_dialog",
            "Run dialog",
            &["çalıştır penceresi", "run dialog", "çalıştır"],
            "Win+R",
        ),
        CommandDescriptor::system_wide(
            "task_view",
            "Task view",
            &["görev görünümü", "task view", "görev görünümünü aç"],
            "Win+Tab",
        ),
        CommandDescriptor::system_wide(
            "snap_window_left",
            "Snap window left",
            &["pencereyi sola", "sola hizala", "snap left"],
            "Win+Left",
        ),
        CommandDescriptor::system_wide(
            "snap_window_right",
            "Snap window right",
            &["pencereyi sağa", "sağa hizala", "snap right"],
            "Win+Right",
        ),
        CommandDescriptor::system_wide(
            "open_file_explorer",
            "File explorer",
            &["dosya gezgini", "file explorer", "dosya gezginini aç"],
            "Win+E",
        ),
        CommandDescriptor::custom(
            "read_emails",
            "Read emails",
            &["maillerimi oku", "mailleri oku", "e-postaları oku", "e postaları oku", "epostaları oku"],
            "read_emails",
        ),
        CommandDescriptor::custom(
            "read_unread_emails",
            "Unread emails",
            &["outlook okunmamış mailler", "okunmamış mailler", "okunmamış e-postalar", "okunmamış mailleri göster"],
            "read_unread_emails",
        ),
        CommandDescriptor::custom(
            "read_today_meetings",
            "Today's meetings",
            &["outlook bugünkü toplantılarım", "bugünkü toplantılarım", "bugünkü toplantılar", "bugün toplantı"],
            "read_today_meetings",
        ),
        CommandDescriptor::custom(
            "get_news",
            "Headlines",
            &["gündem haberleri", "haberleri getir", "haber getir", "son haberler", "gündem"],
            "get_news",
        ),
        CommandDescriptor::custom(
            "read_news",
            "Read news",
            &["haberleri oku", "haber oku", "gündem oku", "son haberleri oku"],
            "read_news",
        ),
        news("read_sports_news", "Sports news", &["spor haberleri", "spor haberlerini oku", "spor haberleri oku"]),
        news(
            "read_economy_news",
            "Economy news",
            &["ekonomi haberleri", "ekonomi haberlerini oku", "ekonomi haberleri oku", "finans haberleri", "borsa haberleri"],
        ),
        news(
            "read_technology_news",
            "Technology news",
            &["teknoloji haberleri", "teknoloji haberlerini oku", "teknoloji haberleri oku", "bilim haberleri"],
        ),
        news("read_health_news", "Health news", &["sağlık haberleri", "sağlık haberlerini oku", "sağlık haberleri oku"]),
        news(
            "read_world_news",
            "World news",
            &["dünya haberleri", "dünya haberlerini oku", "dünya haberleri oku", "uluslararası haberler"],
        ),
        news(
            "read_politics_news",
            "Politics news",
            &["siyaset haberleri", "siyaset haberlerini oku", "siyaset haberleri oku", "politika haberleri"],
        ),
        news(
            "read_entertainment_news",
            "Entertainment news",
            &["magazin haberleri", "magazin haberlerini oku", "magazin haberleri oku", "eğlence haberleri"],
        ),
        CommandDescriptor::custom(
            "wikipedia_search",
            "Wikipedia search",
            &["nedir", "kimdir", "ne demek", "hakkında bilgi", "vikipedi", "wikipedia"],
            "wikipedia_search",
        ),
        CommandDescriptor::custom(
            "twitter_trends",
            "Trending topics",
            &["twitter gündem", "twitter trend", "x gündem", "x trend", "trendler"],
            "twitter_trends",
        ),
        CommandDescriptor::custom(
            "compose_email",
            "Compose email",
            &["mail yaz", "e-posta yaz", "e posta yaz", "eposta yaz", "yeni mail"],
            "compose_email",
        ),
        folder("open_documents", "Documents folder", &["belgeler aç", "belgelerim aç", "documents"]),
        folder("open_pictures", "Pictures folder", &["resimler aç", "resimlerim aç", "pictures"]),
        folder("open_music", "Music folder", &["müzik aç", "müziğim aç", "music"]),
        folder("open_videos", "Videos folder", &["videolar aç", "videolarım aç", "videos"]),
        folder("open_downloads", "Downloads folder", &["indirilenler aç", "downloads"]),
        folder("open_desktop_folder", "Desktop folder", &["masaüstü aç", "desktop"]),
        CommandDescriptor::system_wide(
            "new_folder",
            "New folder",
            &["yeni klasör", "new folder", "klasör oluştur"],
            "Ctrl+Shift+N",
        ),
        CommandDescriptor::system_wide(
            "previous_window",
            "Previous window",
            &["önceki pencere", "previous window"],
            "Alt+Shift+Tab",
        ),
        CommandDescriptor::system_wide(
            "next_window",
            "Next window",
            &["sonraki pencere", "next window"],
            "Alt+Tab",
        ),
    ]
}

/// News category commands share one token and carry their category in the id
fn news(id: &str, display_name: &str, triggers: &[&str]) -> CommandDescriptor {
    CommandDescriptor::custom(id, display_name, triggers, "read_news")
}

/// Known user folders, opened by the custom action backend
fn folder(id: &str, display_name: &str, triggers: &[&str]) -> CommandDescriptor {
    CommandDescriptor::custom(id, display_name, triggers, id)
}

fn active_window_commands() -> Vec<CommandDescriptor> {
    let key = CommandDescriptor::active_window;
    vec![
        key("browser_back", "Back", &["geri", "back", "geriye git"], "Alt+Left"),
        key("browser_forward", "Forward", &["ileri", "forward", "ileriye git"], "Alt+Right"),
        key("refresh", "Refresh", &["yenile", "refresh", "sayfayı yenile"], "F5"),
        key("new_tab", "New tab", &["yeni sekme", "new tab"], "Ctrl+T"),
        key("close_tab", "Close tab", &["sekmeyi kapat", "close tab"], "Ctrl+W"),
        key("new_window", "New window", &["yeni pencere", "new window"], "Ctrl+N"),
        key("close_window", "Close window", &["pencereyi kapat", "close window"], "Alt+F4"),
        key("close_app", "Close application", &["uygulamayı kapat", "close app"], "Alt+F4"),
        key("save", "Save", &["kaydet", "save", "dosyayı kaydet"], "Ctrl+S"),
        key("save_as", "Save as", &["farklı kaydet", "save as", "yeni isimle kaydet"], "Ctrl+Shift+S"),
        key("print", "Print", &["yazdır", "print", "belgeyi yazdır"], "Ctrl+P"),
        key("copy", "Copy", &["kopyala", "copy"], "Ctrl+C"),
        key("cut", "Cut", &["kes", "cut"], "Ctrl+X"),
        key("paste", "Paste", &["yapıştır", "paste"], "Ctrl+V"),
        key("undo", "Undo", &["geri al", "undo", "geri"], "Ctrl+Z"),
        key("redo", "Redo", &["yinele", "redo", "ileri al"], "Ctrl+Y"),
        key("select_all", "Select all", &["tümünü seç", "select all", "hepsini seç"], "Ctrl+A"),
        key("find", "Find", &["bul", "find", "ara"], "Ctrl+F"),
        key("replace", "Replace", &["değiştir", "replace", "bul ve değiştir"], "Ctrl+H"),
        key("zoom_in", "Zoom in", &["yakınlaştır", "zoom in", "büyüt"], "Ctrl+Plus"),
        key("zoom_out", "Zoom out", &["uzaklaştır", "zoom out", "küçült"], "Ctrl+Minus"),
        key("reset_zoom", "Reset zoom", &["yakınlaştırmayı sıfırla", "reset zoom", "normal boyut"], "Ctrl+0"),
        key("fullscreen", "Full screen", &["tam ekran", "fullscreen", "full screen"], "F11"),
        key("navigate_up", "Up", &["yukarı", "up", "yukarı ok"], "Up"),
        key("navigate_down", "Down", &["aşağı", "down", "aşağı ok"], "Down"),
        key("navigate_left", "Left", &["sol", "left", "sol ok"], "Left"),
        key("navigate_right", "Right", &["sağ", "right", "sağ ok"], "Right"),
        key(
            "navigate_home",
            "Go to start",
            &["başlangıç", "home", "başa git", "en başa git", "sayfa başına git"],
            "Ctrl+Home",
        ),
        key("navigate_end", "Go to end", &["son", "end", "sona git", "sayfa sonuna git"], "Ctrl+End"),
        key("page_up", "Page up", &["sayfa yukarı", "page up", "yukarı sayfa"], "PageUp"),
        key("page_down", "Page down", &["sayfa aşağı", "page down", "aşağı sayfa"], "PageDown"),
        key("navigate_previous", "Previous", &["önceki", "previous"], "PageUp"),
        key("navigate_next", "Next", &["sonraki", "next"], "PageDown"),
    ]
}

fn specific_application_commands() -> Vec<CommandDescriptor> {
    let mail = |id: &str, name: &str, triggers: &[&str], key_macro: &str| {
        CommandDescriptor::specific_application(id, name, triggers, MAIL_CLIENT, key_macro)
    };
    vec![
        mail("mark_as_unread", "Mark as unread", &["okunmadı olarak işaretle", "okunmadı yap"], "Ctrl+U"),
        mail(
            "go_to_inbox",
            "Inbox",
            &["inbox", "gelen kutusu", "posta kutusu", "gelen kutusuna git", "posta kutusuna git"],
            "Ctrl+Shift+I",
        ),
        mail(
            "open_calendar",
            "Calendar",
            &["takvim", "takvime git", "takvimi aç", "calendar", "takvim aç"],
            "Ctrl+2",
        ),
        mail("add_attachment", "Add attachment", &["dosya ekle", "ek ekle", "attachment"], "Ctrl+Shift+A"),
        mail(
            "check_mail",
            "Send/receive",
            &["e postaları kontrol et", "e-postaları al", "postaları gönder/al", "mail kontrol et", "mailleri kontrol et"],
            "F9",
        )
        .with_description("Runs send/receive in the mail client"),
        mail("search_email", "Search mail", &["e posta ara", "e-posta ara", "mail ara", "outlook ara"], "Ctrl+E"),
        mail("go_to_drafts", "Drafts", &["taslaklar", "taslaklara git", "drafts"], "Ctrl+Shift+D"),
        mail(
            "go_to_sent",
            "Sent items",
            &["gönderilenler", "gönderilenlere git", "sent items", "gönderilen postalar"],
            "Ctrl+Shift+S",
        ),
        mail(
            "delete_email",
            "Delete mail",
            &["sil", "e-postayı sil", "e postayı sil", "mail sil", "delete"],
            "Delete",
        ),
        mail("flag_email", "Flag mail", &["işaretle", "bayrakla", "flag"], "Ctrl+Shift+G"),
        mail("new_appointment", "New appointment", &["yeni randevu", "randevu oluştur", "new appointment"], "Ctrl+Shift+A"),
        mail("new_meeting", "New meeting", &["yeni toplantı", "toplantı oluştur", "new meeting"], "Ctrl+Shift+Q"),
        mail("new_contact", "New contact", &["yeni kişi", "kişi ekle", "new contact"], "Ctrl+Shift+C"),
        mail("new_task", "New task", &["yeni görev", "görev ekle", "new task"], "Ctrl+Shift+K"),
        mail("address_book", "Address book", &["adres defteri", "address book", "kişiler"], "Ctrl+Shift+B"),
        mail("go_to_folder", "Go to folder", &["klasöre git", "go to folder"], "Ctrl+Y"),
        mail(
            "previous_email",
            "Previous mail",
            &["önceki e posta", "önceki e-posta", "önceki mail", "previous"],
            "Ctrl+Comma",
        ),
        mail(
            "next_email",
            "Next mail",
            &["sonraki e posta", "sonraki e-posta", "sonraki mail", "next"],
            "Ctrl+Period",
        ),
    ]
}

fn mail_client_diagnostics() -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor::custom(
            "mapi_test",
            "Mail client self-test",
            &["mapi test", "mapi test et", "mapi testi", "mapi sistemini test et"],
            "mapi_test",
        ),
        CommandDescriptor::custom(
            "debug_outlook_accounts",
            "Mail accounts",
            &["outlook hesaplarımı göster", "outlook hesapları", "hesaplarımı göster"],
            "debug_outlook_accounts",
        ),
        CommandDescriptor::custom(
            "outlook_stats",
            "Mail client summary",
            &[
                "outlook durum",
                "outlook istatistik",
                "mail sayısı",
                "toplantı sayısı",
                "outlook özet",
                "hızlı durum",
                "outlook stats",
            ],
            "outlook_stats",
        )
        .with_description("Unread mail and today's meeting counts without speech output"),
    ]
}

#[cfg(test)]
#[path = "defaults_test.rs"]
mod tests;
