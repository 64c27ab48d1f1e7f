//! The built-in demo catalog.

use dashboard_core::model::{Course, CourseError, CourseId, Lesson, LessonId, LessonKind};

fn lesson(id: u64, title: &str, duration: &str, kind: LessonKind) -> Lesson {
    Lesson::new(LessonId::new(id), title, duration, kind)
}

/// Builds the six demo courses with their fixed lesson lists.
///
/// # Errors
///
/// Returns `CourseError` if the catalog data fails course validation.
#[allow(clippy::too_many_lines)]
pub fn builtin_courses() -> Result<Vec<Course>, CourseError> {
    use LessonKind::{Article, Quiz, Video};

    Ok(vec![
        Course::new(
            CourseId::new(1),
            "AI Fundamentals",
            "Master the core principles of Artificial Intelligence, from Turing machines to modern neural architectures.",
            "Dr. Sarah Chen",
            "Artificial Intelligence",
            vec![
                lesson(1, "What is Artificial Intelligence?", "12 min", Video),
                lesson(2, "History of AI", "8 min", Article),
                lesson(3, "Types of AI Systems", "15 min", Video),
                lesson(4, "Knowledge Representation", "10 min", Video),
                lesson(5, "Search Algorithms", "18 min", Video),
                lesson(6, "Planning & Reasoning", "14 min", Article),
                lesson(7, "Quiz: AI Basics", "5 min", Quiz),
                lesson(8, "Future of AI", "10 min", Video),
            ],
        )?,
        Course::new(
            CourseId::new(2),
            "Machine Learning Basics",
            "Build a solid foundation in ML — supervised, unsupervised, and reinforcement learning with hands-on examples.",
            "Prof. James Liu",
            "Machine Learning",
            vec![
                lesson(1, "Introduction to Machine Learning", "14 min", Video),
                lesson(2, "Supervised vs Unsupervised Learning", "10 min", Article),
                lesson(3, "Linear Regression Deep Dive", "20 min", Video),
                lesson(4, "Classification Algorithms", "18 min", Video),
                lesson(5, "Decision Trees & Random Forests", "22 min", Video),
                lesson(6, "Model Evaluation & Metrics", "12 min", Article),
                lesson(7, "Overfitting & Regularization", "15 min", Video),
                lesson(8, "Neural Network Basics", "25 min", Video),
                lesson(9, "Quiz: ML Fundamentals", "8 min", Quiz),
                lesson(10, "Building Your First ML Pipeline", "30 min", Video),
            ],
        )?,
        Course::new(
            CourseId::new(3),
            "React for Beginners",
            "Go from zero to production with React 18 — hooks, context, routing, and modern patterns used by top companies.",
            "Emily Rodriguez",
            "Web Development",
            vec![
                lesson(1, "Why React? The Component Model", "10 min", Video),
                lesson(2, "JSX & Virtual DOM", "8 min", Article),
                lesson(3, "useState & useEffect Hooks", "20 min", Video),
                lesson(4, "Props & Component Composition", "15 min", Video),
                lesson(5, "Context API & Global State", "18 min", Video),
                lesson(6, "React Router v6", "16 min", Video),
                lesson(7, "Performance Optimization", "14 min", Article),
                lesson(8, "Quiz: React Essentials", "6 min", Quiz),
                lesson(9, "Build a Real Project", "45 min", Video),
            ],
        )?,
        Course::new(
            CourseId::new(4),
            "Deep Learning with PyTorch",
            "Implement CNNs, RNNs, and Transformers from scratch using PyTorch with GPU acceleration.",
            "Dr. Michael Patel",
            "Deep Learning",
            vec![
                lesson(1, "PyTorch Tensors & Autograd", "18 min", Video),
                lesson(2, "Building Neural Networks", "22 min", Video),
                lesson(3, "Convolutional Neural Networks", "30 min", Video),
                lesson(4, "Image Classification Project", "35 min", Video),
                lesson(5, "Recurrent Neural Networks", "25 min", Video),
                lesson(6, "LSTM & GRU Architectures", "20 min", Article),
                lesson(7, "Attention Mechanism", "28 min", Video),
                lesson(8, "Transformer Architecture", "32 min", Video),
                lesson(9, "Transfer Learning", "18 min", Video),
                lesson(10, "Model Deployment", "22 min", Article),
                lesson(11, "Quiz: Deep Learning Concepts", "10 min", Quiz),
                lesson(12, "Capstone: Build a Chatbot", "60 min", Video),
            ],
        )?,
        Course::new(
            CourseId::new(5),
            "Natural Language Processing",
            "From tokenization to large language models — learn how machines understand and generate human language.",
            "Dr. Aisha Nakamura",
            "NLP",
            vec![
                lesson(1, "Text Preprocessing & Tokenization", "15 min", Video),
                lesson(2, "Word Embeddings (Word2Vec, GloVe)", "20 min", Video),
                lesson(3, "Sentiment Analysis", "18 min", Video),
                lesson(4, "Named Entity Recognition", "16 min", Article),
                lesson(5, "Text Classification", "22 min", Video),
                lesson(6, "Introduction to LLMs", "25 min", Video),
                lesson(7, "Prompt Engineering", "14 min", Article),
                lesson(8, "Quiz: NLP Basics", "7 min", Quiz),
            ],
        )?,
        Course::new(
            CourseId::new(6),
            "Data Science & Analytics",
            "Master data wrangling, EDA, and statistical analysis with Python, Pandas, and visualization libraries.",
            "Carlos Mendes",
            "Data Science",
            vec![
                lesson(1, "Python for Data Science", "20 min", Video),
                lesson(2, "NumPy Essentials", "16 min", Video),
                lesson(3, "Pandas DataFrames", "24 min", Video),
                lesson(4, "Exploratory Data Analysis", "28 min", Video),
                lesson(5, "Data Visualization with Matplotlib", "18 min", Video),
                lesson(6, "Statistical Testing", "22 min", Article),
                lesson(7, "Feature Engineering", "20 min", Video),
                lesson(8, "Building Dashboards", "25 min", Video),
                lesson(9, "Quiz: Data Science Workflow", "8 min", Quiz),
                lesson(10, "Capstone: End-to-End Analysis", "50 min", Video),
            ],
        )?,
    ])
}
