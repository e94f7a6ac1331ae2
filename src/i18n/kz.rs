//! Kazakh texts

pub(super) const TEXTS: &[(&str, &str)] = &[
    ("title", "Академия бастауыш мектебі - Астана"),
    ("lang.ru", "Орысша"),
    ("lang.kz", "Қазақша"),
    ("lang.en", "English"),
    ("nav.about", "Мектеп туралы"),
    ("nav.programs", "Бағдарламалар"),
    ("nav.achievements", "Жетістіктер"),
    ("nav.teachers", "Мұғалімдер"),
    ("nav.news", "Жаңалықтар"),
    ("nav.contact", "Байланыс"),
    ("nav.apply", "Түсу"),
    ("hero.title", "Академия бастауыш мектебі"),
    ("hero.subtitle", "Әр баланың академиялық және жеке табыстарына жету үшін қолайлы орта"),
    ("hero.subtitle.en", "A nurturing environment for academic and personal success of every child"),
    ("hero.btnPrograms", "Біздің бағдарламалар"),
    ("hero.btnAbout", "Толығырақ"),
    ("about.title", "Біздің миссиямыз"),
    ("about.mission", "Біз әр баланың академиялық және жеке табыстарына жету үшін қолайлы және ынталандырушы оқу ортасын құрамыз."),
    ("about.values.title", "Біздің құндылықтарымыз:"),
    ("about.values.v1", "Әр оқушыға бағытталған оқыту"),
    ("about.values.v2", "Еңбекқорлық және ынтымақтастық рухы"),
    ("about.values.v3", "Өзін-өзі құрметтеу және басқаларды құрметтеу"),
    ("about.values.v4", "Біз жауапкершілікті үйретеміз — өз таңдауы үшін, өз табысы үшін"),
    ("about.values.v5", "Отбасылық құндылықтарды сақтау"),
    ("about.stat1", "Жұмыс жылдары"),
    ("about.stat2", "Оқушылар"),
    ("about.stat3", "Мұғалімдер"),
    ("about.stat4", "Сыныптағы оқушылар"),
    ("programs.title", "Білім беру бағдарламалары"),
    ("programs.subtitle", "1-4 сынып балаларына арналған бастауыш мектеп"),
    ("programs.card1.title", "Ағылшын тіліндегі математика"),
    ("programs.card1.text", "Қостілді ойлауды дамыту үшін математиканы ағылшын тілінде оқытудың бірегей бағдарламасы."),
    ("programs.card2.title", "Оқу дағдыларын дамыту"),
    ("programs.card2.text", "Learning how to learn — өздігінен білім алу дағдыларын үйрету және эмоционалды интеллектті дамыту."),
    ("programs.card3.title", "Негізгі бағдарлама"),
    ("programs.card3.text", "Әр оқушыға жеке көзқарас қолданылатын бастауыш мектептің барлық негізгі пәндері."),
    ("programs.activities.title", "Қосымша белсенділіктер"),
    ("programs.activities.chess", "Шахмат"),
    ("programs.activities.robotics", "Робототехника"),
    ("programs.activities.vocal", "Вокал"),
    ("programs.activities.dance", "Би"),
    ("programs.activities.mental", "Ментальды арифметика"),
    ("programs.activities.acting", "Актерлік шеберлік"),
    ("achievements.title", "Оқушыларымыздың жетістіктері"),
    ("achievements.subtitle", "Соңғы 3 жылда олимпиадаларда 15 жүлделі орын"),
    ("achievements.math.title", "Математикалық олимпиадалар"),
    ("achievements.math.text", "Скорняков Всеволод — қалалық математика олимпиадасында 2-орын"),
    ("achievements.abay.title", "«Абай оқулары»"),
    ("achievements.abay.text", "Республикалық конкурс: Марат Альтаир — 1-орын, Кононов Иван — 2-орын"),
    ("achievements.akbota.title", "«Ақбота»"),
    ("achievements.akbota.text", "Республикалық деңгей: Кононов Иван — 1-орын, Тургумбаева Севиль — 3-орын, Кафеджис Владислав — 1-орын"),
    ("achievements.kangaroo.title", "«Кенгуру-математика»"),
    ("achievements.kangaroo.text", "Республикалық деңгей: Проскрякова Лена — 1-орын және басқа да көптеген жүлдегерлер"),
    ("teachers.title", "Біздің мұғалімдер"),
    ("teachers.subtitle", "Әр балаға жеке көзқарас қолданатын тәжірибелі мұғалімдер"),
    ("teachers.t1.name", "Сидоренко Светлана Игоревна"),
    ("teachers.t1.position", "Бастауыш сынып мұғалімі"),
    ("teachers.t1.experience", "Жұмыс тәжірибесі: 15 жыл"),
    ("teachers.t1.achievements", "Жоғары санат. Олимпиадаларға дайындау сертификаттары, курстар мен қалалық конференцияларға қатысу"),
    ("teachers.t2.name", "Михненко Марина Филипповна"),
    ("teachers.t2.position", "Бастауыш сынып мұғалімі, ағылшын тілі мұғалімі"),
    ("teachers.t2.experience", "Жұмыс тәжірибесі: 25 жыл"),
    ("teachers.t2.achievements", "Олимпиадаларға дайындау сертификаттары, курстар мен қалалық конференцияларға қатысу"),
    ("teachers.t3.name", "Прядко Стелла Валерьевна"),
    ("teachers.t3.position", "Мектеп директоры"),
    ("teachers.t3.experience", "Білім беру саласындағы жұмыс тәжірибесі"),
    ("teachers.t3.achievements", "Білім беру мекемесінің басшысы"),
    ("teachers.t4.name", "Залесская Дарья Олеговна"),
    ("teachers.t4.position", "Бастауыш сынып мұғалімі"),
    ("teachers.t4.experience", "Жұмыс тәжірибесі: 12 жыл"),
    ("teachers.t4.achievements", "Модератор. Олимпиадаларға дайындау сертификаттары, курстар мен қалалық конференцияларға қатысу"),
    ("news.title", "Соңғы жаңалықтар"),
    ("news.noNews", "Жаңалықтар әзірше жоқ."),
    ("news.error", "Жаңалықтарды жүктеу мүмкін болмады."),
    ("news.published", "Жарияланды:"),
    ("contact.title", "Байланыстар және қабылдау"),
    ("contact.info.title", "Бізбен байланысыңыз"),
    ("contact.info.text", "Біздің қабылдау комиссиясы барлық сұрақтарыңызға жауап беруге және түсу процесіне көмектесуге дайын."),
    ("contact.info.address", "Астана қ., Сарыарқа ауданы, Шығанақ к-сі, 7"),
    ("contact.info.hours", "Дс-Жм: 08:00 - 17:00"),
    ("contact.social.title", "Біз әлеуметтік желілерде"),
    ("contact.license", "Лицензия № KZ88LAA00031985 07.09.2021ж"),
    ("contact.form.title", "Сұрақ қою"),
    ("contact.form.name", "Сіздің атыңыз"),
    ("contact.form.email", "Сіздің Email"),
    ("contact.form.phone", "Телефон нөмірі"),
    ("contact.form.message", "Сіздің хабарламаңыз"),
    ("contact.form.submit", "Жіберу"),
    ("contact.form.errorName", "Атыңызды енгізіңіз."),
    ("contact.form.errorEmail", "Дұрыс email енгізіңіз."),
    ("contact.form.errorPhone", "Телефон нөмірін енгізіңіз."),
    ("contact.form.errorMessage", "Хабарламаңызды енгізіңіз."),
    ("contact.form.sending", "Жіберілуде..."),
    ("contact.form.success", "Хабарлама сәтті қабылданды және сақталды!"),
    ("contact.form.error", "Хабарламаны жіберу мүмкін болмады. Кейінірек қайталап көріңіз."),
    ("footer.description", "Әр баланың табыстарына жету үшін қолайлы және ынталандырушы оқу ортасы."),
    ("footer.founded", "2021 жылы құрылған"),
    ("footer.links.title", "Жылдам сілтемелер"),
    ("footer.social.title", "Біз әлеуметтік желілерде"),
    ("footer.copy", "© 2024 «Академия бастауыш мектебі» ЖШС. Барлық құқықтар қорғалған."),
    ("news.untitled", "Тақырыпсыз"),
    ("news.readMore", "Толығырақ оқу..."),
    ("news.loading", "Жаңалықтар жүктелуде..."),
    ("contact.form.fixErrors", "Қателерді түзетіңіз:"),
];
