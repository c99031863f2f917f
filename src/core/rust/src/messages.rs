/* src/core/rust/src/messages.rs */

use chrono::{DateTime, Datelike, Utc};

use crate::locale::Locale;

type Catalog = &'static [(&'static str, &'static str)];

const EN: Catalog = &[
  ("welcome", "Welcome"),
  ("home.source.title", "A multilingual blog starter"),
  ("home.source.description", "Accessible, localized posts with translated slugs."),
  ("home.actions.check.blog", "Read the blog"),
  ("blog.title", "Blog"),
  ("blog.read.more", "Read more"),
  ("blog.back", "Back to all posts"),
  ("blog.published", "Published on"),
  ("blog.no.posts", "No posts yet"),
  ("blog.no.posts.desc", "There is nothing published in this language yet."),
  ("blog.return.home", "Return home"),
  ("blog.error.title", "Something went wrong"),
  ("blog.error.description", "The post could not be loaded."),
  ("blog.error.back", "Back to the blog"),
  ("blog.notfound.title", "Post not found"),
  ("blog.notfound.description", "This post does not exist in this language."),
  ("blog.notfound.back", "Back to the blog"),
  ("blog.share", "Share"),
  ("blog.shareLabel", "Copy the link to this post"),
  ("blog.share.copied", "Link copied"),
  ("blog.share.not.copied", "Link not copied"),
  ("not.found.title", "Page not found"),
  ("not.found.description", "The page you are looking for does not exist."),
  ("not.found.back", "Go to the home page"),
  ("lang.switcher.current.lng", "Current language:"),
  ("lang.switcher.change", "Change language"),
  ("lang.switcher.select.language", "Select a language"),
  ("lang.switcher.menu.opened", "Language menu opened"),
  ("lang.switcher.options", "options available"),
  ("lang.switcher.changed.to", "Language changed to"),
  ("lang.switcher.extraInfo", "Posts keep their place when translated"),
  ("monday", "Monday"),
  ("tuesday", "Tuesday"),
  ("wednesday", "Wednesday"),
  ("thursday", "Thursday"),
  ("friday", "Friday"),
  ("saturday", "Saturday"),
  ("sunday", "Sunday"),
  ("january", "January"),
  ("february", "February"),
  ("march", "March"),
  ("april", "April"),
  ("may", "May"),
  ("june", "June"),
  ("july", "July"),
  ("august", "August"),
  ("september", "September"),
  ("october", "October"),
  ("november", "November"),
  ("december", "December"),
];

const ES: Catalog = &[
  ("welcome", "Bienvenida"),
  ("home.source.title", "Un blog multilingüe"),
  ("home.source.description", "Publicaciones accesibles y localizadas con slugs traducidos."),
  ("home.actions.check.blog", "Leer el blog"),
  ("blog.title", "Blog"),
  ("blog.read.more", "Leer más"),
  ("blog.back", "Volver a todas las publicaciones"),
  ("blog.published", "Publicado el"),
  ("blog.no.posts", "Todavía no hay publicaciones"),
  ("blog.no.posts.desc", "No hay nada publicado en este idioma todavía."),
  ("blog.return.home", "Volver al inicio"),
  ("blog.error.title", "Algo salió mal"),
  ("blog.error.description", "No se pudo cargar la publicación."),
  ("blog.error.back", "Volver al blog"),
  ("blog.notfound.title", "Publicación no encontrada"),
  ("blog.notfound.description", "Esta publicación no existe en este idioma."),
  ("blog.notfound.back", "Volver al blog"),
  ("blog.share", "Compartir"),
  ("blog.shareLabel", "Copiar el enlace de esta publicación"),
  ("blog.share.copied", "Enlace copiado"),
  ("blog.share.not.copied", "Enlace no copiado"),
  ("not.found.title", "Página no encontrada"),
  ("not.found.description", "La página que buscás no existe."),
  ("not.found.back", "Ir al inicio"),
  ("lang.switcher.current.lng", "Idioma actual:"),
  ("lang.switcher.change", "Cambiar idioma"),
  ("lang.switcher.select.language", "Seleccioná un idioma"),
  ("lang.switcher.menu.opened", "Menú de idiomas abierto"),
  ("lang.switcher.options", "opciones disponibles"),
  ("lang.switcher.changed.to", "Idioma cambiado a"),
  ("lang.switcher.extraInfo", "Las publicaciones conservan su lugar al traducirse"),
  ("monday", "lunes"),
  ("tuesday", "martes"),
  ("wednesday", "miércoles"),
  ("thursday", "jueves"),
  ("friday", "viernes"),
  ("saturday", "sábado"),
  ("sunday", "domingo"),
  ("january", "enero"),
  ("february", "febrero"),
  ("march", "marzo"),
  ("april", "abril"),
  ("may", "mayo"),
  ("june", "junio"),
  ("july", "julio"),
  ("august", "agosto"),
  ("september", "septiembre"),
  ("october", "octubre"),
  ("november", "noviembre"),
  ("december", "diciembre"),
];

const IT: Catalog = &[
  ("welcome", "Benvenuti"),
  ("home.source.title", "Un blog multilingue"),
  ("home.source.description", "Articoli accessibili e localizzati con slug tradotti."),
  ("home.actions.check.blog", "Leggi il blog"),
  ("blog.title", "Blog"),
  ("blog.read.more", "Leggi di più"),
  ("blog.back", "Torna a tutti gli articoli"),
  ("blog.published", "Pubblicato il"),
  ("blog.no.posts", "Ancora nessun articolo"),
  ("blog.no.posts.desc", "Non c'è ancora niente pubblicato in questa lingua."),
  ("blog.return.home", "Torna alla home"),
  ("blog.error.title", "Qualcosa è andato storto"),
  ("blog.error.description", "Impossibile caricare l'articolo."),
  ("blog.error.back", "Torna al blog"),
  ("blog.notfound.title", "Articolo non trovato"),
  ("blog.notfound.description", "Questo articolo non esiste in questa lingua."),
  ("blog.notfound.back", "Torna al blog"),
  ("blog.share", "Condividi"),
  ("blog.shareLabel", "Copia il link di questo articolo"),
  ("blog.share.copied", "Link copiato"),
  ("blog.share.not.copied", "Link non copiato"),
  ("not.found.title", "Pagina non trovata"),
  ("not.found.description", "La pagina che cerchi non esiste."),
  ("not.found.back", "Vai alla home"),
  ("lang.switcher.current.lng", "Lingua attuale:"),
  ("lang.switcher.change", "Cambia lingua"),
  ("lang.switcher.select.language", "Seleziona una lingua"),
  ("lang.switcher.menu.opened", "Menu delle lingue aperto"),
  ("lang.switcher.options", "opzioni disponibili"),
  ("lang.switcher.changed.to", "Lingua cambiata in"),
  ("monday", "lunedì"),
  ("tuesday", "martedì"),
  ("wednesday", "mercoledì"),
  ("thursday", "giovedì"),
  ("friday", "venerdì"),
  ("saturday", "sabato"),
  ("sunday", "domenica"),
  ("january", "gennaio"),
  ("february", "febbraio"),
  ("march", "marzo"),
  ("april", "aprile"),
  ("may", "maggio"),
  ("june", "giugno"),
  ("july", "luglio"),
  ("august", "agosto"),
  ("september", "settembre"),
  ("october", "ottobre"),
  ("november", "novembre"),
  ("december", "dicembre"),
];

const WEEKDAYS: [&str; 7] = ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"];

const MONTHS: [&str; 12] = [
  "january",
  "february",
  "march",
  "april",
  "may",
  "june",
  "july",
  "august",
  "september",
  "october",
  "november",
  "december",
];

fn catalog(locale: Locale) -> Catalog {
  match locale {
    Locale::En => EN,
    Locale::Es => ES,
    Locale::It => IT,
  }
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
  catalog(locale).iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Translate `key`, falling back to the default locale and then to the key.
pub fn t<'a>(locale: Locale, key: &'a str) -> &'a str {
  lookup(locale, key).or_else(|| lookup(Locale::DEFAULT, key)).unwrap_or(key)
}

/// "Language changed to Italiano"
pub fn changed_to(ui: Locale, target: Locale) -> String {
  format!("{} {}", t(ui, "lang.switcher.changed.to"), target.display_name())
}

/// "Language menu opened. 3 options available."
pub fn menu_opened(ui: Locale, options: usize) -> String {
  format!("{}. {options} {}.", t(ui, "lang.switcher.menu.opened"), t(ui, "lang.switcher.options"))
}

/// Accessible name for the switcher trigger.
pub fn switcher_label(ui: Locale, current: Locale) -> String {
  format!(
    "{} {}. {}",
    t(ui, "lang.switcher.current.lng"),
    current.display_name(),
    t(ui, "lang.switcher.change")
  )
}

/// Long publish date, e.g. `Friday 3 January 2025`.
pub fn date_label(locale: Locale, date: DateTime<Utc>) -> String {
  let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
  let month = MONTHS[date.month0() as usize];
  format!("{} {} {} {}", t(locale, weekday), date.day(), t(locale, month), date.year())
}
