mod quiz_vm;

pub use quiz_vm::{
    CHOICES, ChoiceVm, ImageVm, QuestionVm, QuizIntent, QuizVm, ResultVm, map_question,
    map_result, progress_width,
};
