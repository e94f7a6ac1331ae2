//! Russian texts

pub(super) const TEXTS: &[(&str, &str)] = &[
    ("title", "Начальная школа Академия - Астана"),
    ("lang.ru", "Русский"),
    ("lang.kz", "Қазақша"),
    ("lang.en", "English"),
    ("nav.about", "О школе"),
    ("nav.programs", "Программы"),
    ("nav.achievements", "Достижения"),
    ("nav.teachers", "Педагоги"),
    ("nav.news", "Новости"),
    ("nav.contact", "Контакты"),
    ("nav.apply", "Поступить"),
    ("hero.title", "Начальная школа Академия"),
    ("hero.subtitle", "Благоприятная среда для академических и личных успехов каждого ребёнка"),
    ("hero.subtitle.en", "A nurturing environment for academic and personal success of every child"),
    ("hero.btnPrograms", "Наши программы"),
    ("hero.btnAbout", "Узнать больше"),
    ("about.title", "Наша миссия"),
    ("about.mission", "Мы создадим благоприятную и стимулирующую учебную среду для достижения академических и личных успехов каждого ребёнка."),
    ("about.values.title", "Наши ценности:"),
    ("about.values.v1", "Обучение, ориентированное на каждого ученика"),
    ("about.values.v2", "Трудолюбие и дух сотрудничества"),
    ("about.values.v3", "Самоуважение и уважение к другим"),
    ("about.values.v4", "Мы учим быть ответственным — за свой выбор, за свой успех"),
    ("about.values.v5", "Поддержание семейных ценностей"),
    ("about.stat1", "Года работы"),
    ("about.stat2", "Учеников"),
    ("about.stat3", "Педагогов"),
    ("about.stat4", "Учеников в классе"),
    ("programs.title", "Образовательные программы"),
    ("programs.subtitle", "Начальная школа для детей 1-4 классов"),
    ("programs.card1.title", "Математика на английском"),
    ("programs.card1.text", "Уникальная программа изучения математики на английском языке для развития билингвального мышления."),
    ("programs.card2.title", "Развитие навыков обучения"),
    ("programs.card2.text", "Learning how to learn — обучение навыкам самообразования и развитие эмоционального интеллекта."),
    ("programs.card3.title", "Основная программа"),
    ("programs.card3.text", "Все основные предметы начальной школы с индивидуальным подходом к каждому ученику."),
    ("programs.activities.title", "Дополнительные активности"),
    ("programs.activities.chess", "Шахматы"),
    ("programs.activities.robotics", "Робототехника"),
    ("programs.activities.vocal", "Вокал"),
    ("programs.activities.dance", "Танцы"),
    ("programs.activities.mental", "Ментальная арифметика"),
    ("programs.activities.acting", "Актерское мастерство"),
    ("achievements.title", "Достижения наших учеников"),
    ("achievements.subtitle", "15 призовых мест на олимпиадах за последние 3 года"),
    ("achievements.math.title", "Математические олимпиады"),
    ("achievements.math.text", "Скорняков Всеволод — 2 место на городской олимпиаде по математике среди школьников"),
    ("achievements.abay.title", "«Абаевские чтения»"),
    ("achievements.abay.text", "Республиканский конкурс: Марат Альтаир — 1 место, Кононов Иван — 2 место"),
    ("achievements.akbota.title", "«Акбота»"),
    ("achievements.akbota.text", "Республиканский уровень: Кононов Иван — 1 место, Тургумбаева Севиль — 3 место, Кафеджис Владислав — 1 место"),
    ("achievements.kangaroo.title", "«Кенгуру-математика»"),
    ("achievements.kangaroo.text", "Республиканский уровень: Проскрякова Лена — 1 место и многие другие призёры"),
    ("teachers.title", "Наши педагоги"),
    ("teachers.subtitle", "Опытные преподаватели с индивидуальным подходом к каждому ребёнку"),
    ("teachers.t1.name", "Сидоренко Светлана Игоревна"),
    ("teachers.t1.position", "Учитель начальных классов"),
    ("teachers.t1.experience", "Опыт работы: 15 лет"),
    ("teachers.t1.achievements", "Высшая категория. Сертификаты за подготовку к олимпиадам, участие в курсах и городских конференциях"),
    ("teachers.t2.name", "Михненко Марина Филипповна"),
    ("teachers.t2.position", "Учитель начальных классов, учитель английского языка"),
    ("teachers.t2.experience", "Опыт работы: 25 лет"),
    ("teachers.t2.achievements", "Сертификаты за подготовку к олимпиадам, участие в курсах и городских конференциях"),
    ("teachers.t3.name", "Прядко Стелла Валерьевна"),
    ("teachers.t3.position", "Директор школы"),
    ("teachers.t3.experience", "Опыт работы в образовании"),
    ("teachers.t3.achievements", "Руководитель образовательного учреждения"),
    ("teachers.t4.name", "Залесская Дарья Олеговна"),
    ("teachers.t4.position", "Учитель начальных классов"),
    ("teachers.t4.experience", "Опыт работы: 12 лет"),
    ("teachers.t4.achievements", "Модератор. Сертификаты за подготовку к олимпиадам, участие в курсах и городских конференциях"),
    ("news.title", "Последние новости"),
    ("news.noNews", "Новостей пока нет."),
    ("news.error", "Не удалось загрузить новости."),
    ("news.published", "Опубликовано:"),
    ("contact.title", "Контакты и поступление"),
    ("contact.info.title", "Свяжитесь с нами"),
    ("contact.info.text", "Наша приемная комиссия готова ответить на все ваши вопросы и помочь с процессом поступления."),
    ("contact.info.address", "г. Астана, район Сарыарка, ул. Шыганак, 7"),
    ("contact.info.hours", "Пн-Пт: 08:00 - 17:00"),
    ("contact.social.title", "Мы в социальных сетях"),
    ("contact.license", "Лицензия № KZ88LAA00031985 от 07.09.2021г"),
    ("contact.form.title", "Задать вопрос"),
    ("contact.form.name", "Ваше имя"),
    ("contact.form.email", "Ваш Email"),
    ("contact.form.phone", "Номер телефона"),
    ("contact.form.message", "Ваше сообщение"),
    ("contact.form.submit", "Отправить"),
    ("contact.form.errorName", "Пожалуйста, введите ваше имя."),
    ("contact.form.errorEmail", "Пожалуйста, введите корректный email."),
    ("contact.form.errorPhone", "Пожалуйста, введите номер телефона."),
    ("contact.form.errorMessage", "Пожалуйста, введите ваше сообщение."),
    ("contact.form.sending", "Отправка..."),
    ("contact.form.success", "Сообщение успешно получено и сохранено!"),
    ("contact.form.error", "Не удалось отправить сообщение. Попробуйте позже."),
    ("footer.description", "Благоприятная и стимулирующая учебная среда для достижения успехов каждого ребёнка."),
    ("footer.founded", "Основана в 2021 году"),
    ("footer.links.title", "Быстрые ссылки"),
    ("footer.social.title", "Мы в соцсетях"),
    ("footer.copy", "© 2024 ТОО «Начальная школа Академия». Все права защищены."),
    ("news.untitled", "Без заголовка"),
    ("news.readMore", "Читать полностью..."),
    ("news.loading", "Загрузка новостей..."),
    ("contact.form.fixErrors", "Пожалуйста, исправьте ошибки:"),
];
