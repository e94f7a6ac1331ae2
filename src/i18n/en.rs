//! English texts

pub(super) const TEXTS: &[(&str, &str)] = &[
    ("title", "Akademia Primary School - Astana"),
    ("lang.ru", "Russian"),
    ("lang.kz", "Kazakh"),
    ("lang.en", "English"),
    ("nav.about", "About School"),
    ("nav.programs", "Programs"),
    ("nav.achievements", "Achievements"),
    ("nav.teachers", "Teachers"),
    ("nav.news", "News"),
    ("nav.contact", "Contacts"),
    ("nav.apply", "Apply"),
    ("news.title", "Latest News"),
    ("news.noNews", "No news yet."),
    ("news.error", "Failed to load news."),
    ("news.published", "Published:"),
    ("hero.title", "Akademia Primary School"),
    ("hero.subtitle", "A nurturing environment for academic and personal success of every child"),
    ("hero.subtitle.en", "A nurturing environment for academic and personal success of every child"),
    ("hero.btnPrograms", "Our Programs"),
    ("hero.btnAbout", "Learn More"),
    ("about.title", "Our Mission"),
    ("about.mission", "We create a favorable and stimulating learning environment for the academic and personal success of every child."),
    ("about.values.title", "Our Values:"),
    ("about.values.v1", "Student-centered learning"),
    ("about.values.v2", "Hard work and spirit of cooperation"),
    ("about.values.v3", "Self-respect and respect for others"),
    ("about.values.v4", "We teach responsibility — for one's choices, for one's success"),
    ("about.values.v5", "Maintaining family values"),
    ("about.stat1", "Years of Experience"),
    ("about.stat2", "Students"),
    ("about.stat3", "Teachers"),
    ("about.stat4", "Students per Class"),
    ("programs.title", "Educational Programs"),
    ("programs.subtitle", "Primary school for children grades 1-4"),
    ("programs.card1.title", "Math in English"),
    ("programs.card1.text", "Unique program for learning mathematics in English to develop bilingual thinking."),
    ("programs.card2.title", "Learning Skills Development"),
    ("programs.card2.text", "Learning how to learn — teaching self-education skills and developing emotional intelligence."),
    ("programs.card3.title", "Core Curriculum"),
    ("programs.card3.text", "All primary school core subjects with an individual approach to each student."),
    ("programs.activities.title", "Additional Activities"),
    ("programs.activities.chess", "Chess"),
    ("programs.activities.robotics", "Robotics"),
    ("programs.activities.vocal", "Vocal"),
    ("programs.activities.dance", "Dance"),
    ("programs.activities.mental", "Mental Arithmetic"),
    ("programs.activities.acting", "Acting"),
    ("achievements.title", "Student Achievements"),
    ("achievements.subtitle", "15 prize-winning places in olympiads over the past 3 years"),
    ("achievements.math.title", "Math Olympiads"),
    ("achievements.math.text", "Skornyakov Vsevolod — 2nd place at city math olympiad among schoolchildren"),
    ("achievements.abay.title", "\"Abay Readings\""),
    ("achievements.abay.text", "Republican competition: Marat Altair — 1st place, Kononov Ivan — 2nd place"),
    ("achievements.akbota.title", "\"Akbota\""),
    ("achievements.akbota.text", "Republican level: Kononov Ivan — 1st place, Turgumbayeva Sevil — 3rd place, Kafejis Vladislav — 1st place"),
    ("achievements.kangaroo.title", "\"Kangaroo Math\""),
    ("achievements.kangaroo.text", "Republican level: Proskryakova Lena — 1st place and many other prize winners"),
    ("teachers.title", "Our Teachers"),
    ("teachers.subtitle", "Experienced teachers with individual approach to each child"),
    ("teachers.t1.name", "Sidorenko Svetlana Igorevna"),
    ("teachers.t1.position", "Primary School Teacher"),
    ("teachers.t1.experience", "Work experience: 15 years"),
    ("teachers.t1.achievements", "Highest category. Certificates for olympiad preparation, participation in courses and city conferences"),
    ("teachers.t2.name", "Mikhnenko Marina Filippovna"),
    ("teachers.t2.position", "Primary School Teacher, English Teacher"),
    ("teachers.t2.experience", "Work experience: 25 years"),
    ("teachers.t2.achievements", "Certificates for olympiad preparation, participation in courses and city conferences"),
    ("teachers.t3.name", "Pryadko Stella Valeryevna"),
    ("teachers.t3.position", "School Director"),
    ("teachers.t3.experience", "Educational work experience"),
    ("teachers.t3.achievements", "Head of educational institution"),
    ("teachers.t4.name", "Zalesskaya Darya Olegovna"),
    ("teachers.t4.position", "Primary School Teacher"),
    ("teachers.t4.experience", "Work experience: 12 years"),
    ("teachers.t4.achievements", "Moderator. Certificates for olympiad preparation, participation in courses and city conferences"),
    ("contact.title", "Contacts and Admission"),
    ("contact.info.title", "Contact Us"),
    ("contact.info.text", "Our admissions office is ready to answer all your questions and help with the enrollment process."),
    ("contact.info.address", "Astana, Saryarka district, Shyganak st., 7"),
    ("contact.info.hours", "Mon-Fri: 08:00 - 17:00"),
    ("contact.social.title", "Follow Us"),
    ("contact.license", "License № KZ88LAA00031985 dated 07.09.2021"),
    ("contact.form.title", "Ask a Question"),
    ("contact.form.name", "Your Name"),
    ("contact.form.email", "Your Email"),
    ("contact.form.phone", "Phone Number"),
    ("contact.form.message", "Your Message"),
    ("contact.form.submit", "Send"),
    ("contact.form.errorName", "Please enter your name."),
    ("contact.form.errorEmail", "Please enter a valid email."),
    ("contact.form.errorPhone", "Please enter phone number."),
    ("contact.form.errorMessage", "Please enter your message."),
    ("contact.form.sending", "Sending..."),
    ("contact.form.success", "Message successfully received and saved!"),
    ("contact.form.error", "Failed to send message. Please try again later."),
    ("footer.description", "A favorable and stimulating learning environment for the success of every child."),
    ("footer.founded", "Founded in 2021"),
    ("footer.links.title", "Quick Links"),
    ("footer.social.title", "Follow Us"),
    ("footer.copy", "© 2024 Akademia Primary School LLP. All rights reserved."),
    ("news.untitled", "Untitled"),
    ("news.readMore", "Read more..."),
    ("news.loading", "Loading news..."),
    ("contact.form.fixErrors", "Please correct the errors:"),
];
