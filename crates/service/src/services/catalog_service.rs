//! Read-only listings shown on the website. Never touches storage.

use models::{course::Course, faculty::Faculty, testimonial::Testimonial};
use once_cell::sync::Lazy;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static FACULTY: Lazy<Vec<Faculty>> = Lazy::new(|| {
    [
        (
            "1",
            "Dr. Rajesh Kumar",
            "M.Sc., Ph.D. (Mathematics)",
            "Mathematics",
            "15+ years of teaching experience",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=300&h=300&fit=crop&crop=face",
        ),
        (
            "2",
            "Mrs. Priya Sharma",
            "M.Sc. (Physics), B.Ed.",
            "Physics",
            "12+ years of teaching experience",
            "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=300&h=300&fit=crop&crop=face",
        ),
        (
            "3",
            "Mr. Amit Verma",
            "M.Sc. (Chemistry), NET Qualified",
            "Chemistry",
            "10+ years of teaching experience",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=300&fit=crop&crop=face",
        ),
    ]
    .into_iter()
    .map(|(id, name, qualification, subject, experience, image_url)| Faculty {
        id: id.into(),
        name: name.into(),
        qualification: qualification.into(),
        subject: subject.into(),
        experience: experience.into(),
        image_url: image_url.into(),
    })
    .collect()
});

static COURSES: Lazy<Vec<Course>> = Lazy::new(|| {
    vec![
        Course {
            id: "1".into(),
            title: "Class 9-10 Foundation".into(),
            description: "Build a strong foundation in Mathematics and Science for board exams and competitive preparation.".into(),
            subjects: strings(&["Mathematics", "Science", "Physics", "Chemistry"]),
            duration: "1 Year Program".into(),
            target: "Class 9-10 Students".into(),
            highlights: strings(&["Board Exam Preparation", "Concept Building", "Regular Tests", "Doubt Sessions"]),
        },
        Course {
            id: "2".into(),
            title: "Class 11-12 Science".into(),
            description: "Comprehensive coaching for CBSE/State board exams with focus on PCM subjects.".into(),
            subjects: strings(&["Physics", "Chemistry", "Mathematics"]),
            duration: "2 Year Program".into(),
            target: "Class 11-12 Students".into(),
            highlights: strings(&["Board Excellence", "JEE Foundation", "NEET Foundation", "Weekly Tests"]),
        },
        Course {
            id: "3".into(),
            title: "Competitive Exam Prep".into(),
            description: "Specialized coaching for JEE, NEET, and other competitive examinations.".into(),
            subjects: strings(&["Physics", "Chemistry", "Mathematics", "Biology"]),
            duration: "Crash & Regular Courses".into(),
            target: "Competitive Exam Aspirants".into(),
            highlights: strings(&["JEE Main/Advanced", "NEET Preparation", "Mock Tests", "Study Material"]),
        },
    ]
});

static TESTIMONIALS: Lazy<Vec<Testimonial>> = Lazy::new(|| {
    [
        (
            "1",
            "Rahul Singh",
            "Class 12 - 2024 Batch",
            "Sangharsh Classes helped me achieve my dream of scoring 95% in boards. The teachers here truly care about each student's progress.",
            "95% in Board Exams",
        ),
        (
            "2",
            "Priya Patel",
            "JEE 2024",
            "The competitive exam preparation at Sangharsh Classes is exceptional. Regular tests and personalized attention helped me crack JEE.",
            "JEE Main Qualified",
        ),
        (
            "3",
            "Amit Kumar",
            "Class 10 - 2024 Batch",
            "I was weak in Mathematics, but the teachers here made it so easy to understand. Now I love solving math problems!",
            "90% in Mathematics",
        ),
        (
            "4",
            "Sneha Gupta",
            "NEET 2024",
            "The biology and chemistry faculty at Sangharsh Classes are amazing. Their teaching methods made complex topics simple.",
            "NEET Qualified",
        ),
    ]
    .into_iter()
    .map(|(id, name, student_class, message, achievement)| Testimonial {
        id: id.into(),
        name: name.into(),
        student_class: student_class.into(),
        message: message.into(),
        achievement: achievement.into(),
        image_url: None,
    })
    .collect()
});

pub fn faculty() -> &'static [Faculty] {
    &FACULTY
}

pub fn courses() -> &'static [Course] {
    &COURSES
}

pub fn testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS
}
