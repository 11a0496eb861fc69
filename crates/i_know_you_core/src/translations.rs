//! Static display strings for each language.

use tracing::instrument;

use crate::LanguageCode;

/// Number of entries in every question list.
pub const QUESTION_COUNT: usize = 6;

/// Number of cycling messages on the thinking screen.
pub const THINKING_MESSAGE_COUNT: usize = 5;

/// Every string the screens display, for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Translations {
    /// Welcome screen heading.
    pub title: &'static str,
    /// Line under the heading.
    pub subtitle: &'static str,
    /// Instruction above the input; contains a line break.
    pub instruction: &'static str,
    /// Hint under the input.
    pub hint: &'static str,
    /// Label of the welcome screen's submit button.
    pub continue_button: &'static str,

    /// Label above each question.
    pub analyzing: &'static str,
    /// Positive answer.
    pub yes: &'static str,
    /// Negative answer.
    pub no: &'static str,
    /// Label of the final question's submit button.
    pub guess_button: &'static str,
    /// Hint under the final question's input.
    pub number_hint: &'static str,
    /// Question texts in order; the last one asks for a number.
    pub questions: [&'static str; QUESTION_COUNT],

    /// Thinking screen heading.
    pub thinking_title: &'static str,
    /// Messages cycled while thinking.
    pub thinking_messages: [&'static str; THINKING_MESSAGE_COUNT],

    /// Heading over the revealed digits.
    pub result_label: &'static str,
    /// Confirmation shown once every digit is revealed.
    pub result_question: &'static str,
    /// Label of the reset button.
    pub try_again: &'static str,
}

static TR: Translations = Translations {
    title: "Seni Tanıyorum",
    subtitle: "Hadi Başlayalım",
    instruction: "1 ile 999 arasında\nbir sayı düşün",
    hint: "Kolay Olmasın!",
    continue_button: "Devam Et",

    analyzing: "Seni Bekliyorum",
    yes: "Evet",
    no: "Hayır",
    guess_button: "Tahmin Et",
    number_hint: "1 ile 999 arasında farklı bir sayı",
    questions: [
        "Bu sayıyı seçerken ilk aklına gelen miydi?",
        "Sayı senin için özel bir anlam taşıyor mu?",
        "Sayı büyüdükçe sana daha mı güvenli geliyor?",
        "Bu sayıyı başkasına söylesen çekinir miydin?",
        "Sayının enerjisi yüksek mi sence?",
        "Şimdi aklına gelen ilk sayıyı yaz",
    ],

    thinking_title: "Analiz Ediliyor",
    thinking_messages: [
        "Sinir ağları taranıyor",
        "Veri analiz ediliyor",
        "Düşünce kalıpları işleniyor",
        "Nöral bağlantılar kuruluyor",
        "Sonuç hesaplanıyor",
    ],

    result_label: "Benim Tahminim",
    result_question: "Bu sayıyı mı düşünüyordunuz?",
    try_again: "Tekrar Dene",
};

static EN: Translations = Translations {
    title: "I Know You",
    subtitle: "Let's Begin",
    instruction: "Think of a number\nbetween 1 and 999",
    hint: "Don't Make It Easy!",
    continue_button: "Continue",

    analyzing: "Waiting for You",
    yes: "Yes",
    no: "No",
    guess_button: "Guess",
    number_hint: "A different number between 1 and 999",
    questions: [
        "Was this the first number that came to mind?",
        "Does this number have a special meaning for you?",
        "Do bigger numbers make you feel safer?",
        "Would you hesitate to tell someone this number?",
        "Do you think this number has high energy?",
        "Now write the first number that comes to mind",
    ],

    thinking_title: "Analyzing",
    thinking_messages: [
        "Scanning neural networks",
        "Analyzing data",
        "Processing thought patterns",
        "Establishing neural connections",
        "Calculating result",
    ],

    result_label: "My Guess",
    result_question: "Is this the number you were thinking of?",
    try_again: "Try Again",
};

static RU: Translations = Translations {
    title: "Я тебя знаю",
    subtitle: "Давай начнём",
    instruction: "Загадай число\nот 1 до 999",
    hint: "Не упрощай!",
    continue_button: "Продолжить",

    analyzing: "Жду тебя",
    yes: "Да",
    no: "Нет",
    guess_button: "Угадать",
    number_hint: "Другое число от 1 до 999",
    questions: [
        "Это было первое число, которое пришло на ум?",
        "Это число имеет для тебя особый смысл?",
        "Большие числа кажутся тебе безопаснее?",
        "Ты бы постеснялся сказать это число кому-то?",
        "Как думаешь, у этого числа высокая энергия?",
        "Теперь напиши первое число, которое придёт в голову",
    ],

    thinking_title: "Анализирую",
    thinking_messages: [
        "Сканирование нейронных сетей",
        "Анализ данных",
        "Обработка шаблонов мышления",
        "Установка нейронных связей",
        "Расчёт результата",
    ],

    result_label: "Моя догадка",
    result_question: "Это то число, которое ты загадал?",
    try_again: "Попробовать снова",
};

/// Returns the string bundle for a language.
#[instrument]
pub fn translations(code: LanguageCode) -> &'static Translations {
    match code {
        LanguageCode::Tr => &TR,
        LanguageCode::En => &EN,
        LanguageCode::Ru => &RU,
    }
}
